//! Run settings.
//!
//! Layered lowest to highest: built-in defaults, an optional `wx-ingest.toml`
//! in the working directory (or an explicit file), `WX_INGEST_*` environment
//! variables. Command-line flags are applied on top by the caller.

use crate::error::Result;
use crate::utils::constants::{
    CONFIG_FILE_NAME, DEFAULT_DATABASE, DEFAULT_DATA_DIR, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
    ENV_PREFIX,
};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Directory holding `<station>.txt` files
    pub data_dir: PathBuf,
    /// SQLite database file
    pub database: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("database", DEFAULT_DATABASE)?
            .set_default("log_file", DEFAULT_LOG_FILE)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.to_path_buf())),
            None => builder.add_source(File::with_name(CONFIG_FILE_NAME).required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
