pub mod station_file_reader;

pub use station_file_reader::{ReadOutcome, ReadStats, StationFileReader};
