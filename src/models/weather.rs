use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One day of observations for one station.
///
/// Measurements keep the source units: temperatures in tenths of a degree
/// Celsius, precipitation in tenths of a millimetre. `None` marks a value
/// the station file reported as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct WeatherRecord {
    #[validate(length(min = 1))]
    pub station: String,

    pub date: NaiveDate,

    pub maximum_temperature: Option<i32>,
    pub minimum_temperature: Option<i32>,
    pub precipitation: Option<i32>,
}

impl WeatherRecord {
    pub fn new(
        station: String,
        date: NaiveDate,
        maximum_temperature: Option<i32>,
        minimum_temperature: Option<i32>,
        precipitation: Option<i32>,
    ) -> Self {
        Self {
            station,
            date,
            maximum_temperature,
            minimum_temperature,
            precipitation,
        }
    }

    /// Only complete records take part in yearly aggregation
    pub fn is_complete(&self) -> bool {
        self.maximum_temperature.is_some()
            && self.minimum_temperature.is_some()
            && self.precipitation.is_some()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
