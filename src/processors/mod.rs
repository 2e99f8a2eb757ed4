pub mod aggregator;
pub mod bulk_loader;
pub mod pipeline;

pub use aggregator::{AggregationSummary, YearlyAggregator};
pub use bulk_loader::{BulkLoader, LoadSummary};
pub use pipeline::{IngestPipeline, RunReport};
