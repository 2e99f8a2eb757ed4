use crate::processors::{BulkLoader, YearlyAggregator};
use crate::readers::{ReadStats, StationFileReader};
use crate::store::WeatherStore;
use crate::utils::progress::ProgressReporter;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

/// Counters for one ingestion run; `failures` lists stages that errored
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub read: ReadStats,
    pub records_read: usize,
    pub records_inserted: usize,
    pub statistics_inserted: usize,
    pub statistics_skipped: usize,
    pub failures: Vec<String>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Ingestion Summary:\n\
             - Station files read: {} ({} failed)\n\
             - New records: {} read, {} inserted\n\
             - Rows skipped: {} already stored, {} malformed\n\
             - Statistics: {} inserted, {} already present",
            self.read.files_read,
            self.read.files_failed,
            self.records_read,
            self.records_inserted,
            self.read.rows_existing,
            self.read.rows_rejected,
            self.statistics_inserted,
            self.statistics_skipped,
        );
        for failure in &self.failures {
            summary.push_str(&format!("\n- FAILED: {}", failure));
        }
        summary
    }
}

/// Read station files, bulk-load the new rows, then aggregate.
///
/// Every stage runs on every invocation. A failing stage is logged and
/// recorded in the report; the stages after it still run.
pub struct IngestPipeline {
    data_dir: PathBuf,
    reader: StationFileReader,
    loader: BulkLoader,
    aggregator: YearlyAggregator,
}

impl IngestPipeline {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            reader: StationFileReader::new(),
            loader: BulkLoader::new(),
            aggregator: YearlyAggregator::new(),
        }
    }

    pub fn run(&self, store: &mut WeatherStore, progress: Option<&ProgressReporter>) -> RunReport {
        let mut report = RunReport::default();

        let outcome = self.reader.read_directory(&self.data_dir, store, progress);
        report.read = outcome.stats;
        report.records_read = outcome.records.len();
        if report.read.files_failed > 0 {
            report
                .failures
                .push(format!("{} station file(s) could not be read", report.read.files_failed));
        }

        if let Some(p) = progress {
            p.set_message(&format!("Loading {} records...", outcome.records.len()));
        }
        match self.loader.load(store, &outcome.records) {
            Ok(summary) => report.records_inserted = summary.inserted,
            Err(e) => {
                error!("Error in inserting weather rows: {}", e);
                report.failures.push(format!("bulk load: {}", e));
            }
        }

        if let Some(p) = progress {
            p.set_message("Aggregating yearly statistics...");
        }
        match self.aggregator.run(store) {
            Ok(summary) => {
                report.statistics_inserted = summary.inserted;
                report.statistics_skipped = summary.skipped_existing;
            }
            Err(e) => {
                error!("Error in inserting statistics rows: {}", e);
                report.failures.push(format!("aggregation: {}", e));
            }
        }

        info!(
            records_inserted = report.records_inserted,
            statistics_inserted = report.statistics_inserted,
            failures = report.failures.len(),
            "Ingestion run finished"
        );
        report
    }
}
