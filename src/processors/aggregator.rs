use crate::error::Result;
use crate::models::Statistic;
use crate::store::WeatherStore;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSummary {
    pub inserted: usize,
    pub skipped_existing: usize,
}

/// Derives yearly per-station statistics from complete weather records.
///
/// Means of max/min temperature and total precipitation come from a grouped
/// query in the store; (station, year) pairs already aggregated are left as
/// they are, so statistics are computed once per year and never refreshed.
pub struct YearlyAggregator;

impl YearlyAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, store: &mut WeatherStore) -> Result<AggregationSummary> {
        let start = Instant::now();
        let result = self.aggregate(store);

        info!(
            "Statistics data inserted in: {:.3} seconds. Rows count: {}",
            start.elapsed().as_secs_f64(),
            result.as_ref().map(|s| s.inserted).unwrap_or(0)
        );

        result
    }

    fn aggregate(&self, store: &mut WeatherStore) -> Result<AggregationSummary> {
        let mut new_stats: Vec<Statistic> = Vec::new();
        let mut skipped_existing = 0;

        for stat in store.yearly_aggregates()? {
            if store.statistic_exists(&stat.station, stat.year)? {
                debug!("Statistic already exists: {} {}", stat.station, stat.year);
                skipped_existing += 1;
            } else {
                new_stats.push(stat);
            }
        }

        if new_stats.is_empty() {
            info!("No new statistics to insert");
            return Ok(AggregationSummary {
                inserted: 0,
                skipped_existing,
            });
        }

        let inserted = store.insert_statistics(&new_stats)?;
        Ok(AggregationSummary {
            inserted,
            skipped_existing,
        })
    }
}

impl Default for YearlyAggregator {
    fn default() -> Self {
        Self::new()
    }
}
