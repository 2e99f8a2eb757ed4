use crate::error::Result;
use crate::models::WeatherRecord;
use crate::store::WeatherStore;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub submitted: usize,
    pub inserted: usize,
}

/// Persists freshly read weather records in a single batch
pub struct BulkLoader;

impl BulkLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, store: &mut WeatherStore, records: &[WeatherRecord]) -> Result<LoadSummary> {
        let start = Instant::now();
        let result = store.insert_weather_records(records);

        info!(
            "Weather data inserted in: {:.3} seconds. Rows count: {}",
            start.elapsed().as_secs_f64(),
            records.len()
        );

        let inserted = result?;
        Ok(LoadSummary {
            submitted: records.len(),
            inserted,
        })
    }
}

impl Default for BulkLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_load_counts_rows() -> Result<()> {
        let mut store = WeatherStore::in_memory()?;
        let records: Vec<WeatherRecord> = (1..=3)
            .map(|day| {
                WeatherRecord::new(
                    "USC001".to_string(),
                    NaiveDate::from_ymd_opt(1990, 3, day).unwrap(),
                    Some(10),
                    None,
                    Some(0),
                )
            })
            .collect();

        let summary = BulkLoader::new().load(&mut store, &records)?;
        assert_eq!(summary, LoadSummary { submitted: 3, inserted: 3 });
        assert_eq!(store.count_weather_records()?, 3);

        let empty = BulkLoader::new().load(&mut store, &[])?;
        assert_eq!(empty.inserted, 0);
        Ok(())
    }
}
