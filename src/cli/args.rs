use clap::Parser;
use std::path::PathBuf;

/// Every flag is optional: with no arguments the command ingests the
/// configured data directory and then aggregates.
#[derive(Parser, Debug)]
#[command(name = "wx-ingest")]
#[command(about = "Ingest weather station files and compute yearly statistics")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Configuration file [default: ./wx-ingest.toml if present]")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Directory containing <station>.txt files")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, help = "SQLite database file")]
    pub database: Option<PathBuf>,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose (trace) logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Suppress the progress spinner")]
    pub quiet: bool,

    #[arg(long, help = "Print the run report as JSON")]
    pub json: bool,
}
