use crate::error::{ProcessingError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;

/// Install the global subscriber, appending `timestamp LEVEL message` lines to `log_file`.
pub fn init(log_file: &Path, level: &str) -> Result<()> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| ProcessingError::Logging(format!("Unknown log level: '{}'", level)))?;

    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(filter)
        .try_init()
        .map_err(|e| ProcessingError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_rejects_unknown_level() {
        let dir = TempDir::new().unwrap();
        let result = init(&dir.path().join("log.log"), "loud");
        assert!(matches!(result, Err(ProcessingError::Logging(_))));
    }
}
