/// Literal used by station files for a missing measurement
pub const MISSING_VALUE: i32 = -9999;

/// Station file layout
pub const STATION_FILE_EXTENSION: &str = "txt";
pub const FIELD_DELIMITER: u8 = b'\t';
pub const DATE_FORMAT: &str = "%Y%m%d";
pub const EXPECTED_COLUMNS: usize = 4;

/// Defaults, overridable through configuration
pub const DEFAULT_DATA_DIR: &str = "data/wx_data";
pub const DEFAULT_DATABASE: &str = "weather.db";
pub const DEFAULT_LOG_FILE: &str = "log.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Optional configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "wx-ingest";
pub const ENV_PREFIX: &str = "WX_INGEST";
