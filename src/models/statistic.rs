use serde::{Deserialize, Serialize};

/// Yearly summary for one station, derived from complete weather records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub station: String,
    pub year: i32,

    pub average_max_temperature: f64,
    pub average_min_temperature: f64,
    pub total_precipitation: i64,
}

impl Statistic {
    pub fn new(
        station: String,
        year: i32,
        average_max_temperature: f64,
        average_min_temperature: f64,
        total_precipitation: i64,
    ) -> Self {
        Self {
            station,
            year,
            average_max_temperature,
            average_min_temperature,
            total_precipitation,
        }
    }
}
