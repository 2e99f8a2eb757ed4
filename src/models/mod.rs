pub mod statistic;
pub mod weather;

pub use statistic::Statistic;
pub use weather::WeatherRecord;
