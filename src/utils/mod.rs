pub mod constants;
pub mod filename;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use filename::{is_station_file, station_id_from_path};
pub use progress::ProgressReporter;
