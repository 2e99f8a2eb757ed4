use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::processors::IngestPipeline;
use crate::settings::Settings;
use crate::store::WeatherStore;
use crate::utils::logging;
use crate::utils::progress::ProgressReporter;
use tracing::{error, info};

pub fn run(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        settings.data_dir = data_dir;
    }
    if let Some(database) = cli.database {
        settings.database = database;
    }
    if let Some(log_file) = cli.log_file {
        settings.log_file = log_file;
    }
    if cli.verbose {
        settings.log_level = "trace".to_string();
    }

    logging::init(&settings.log_file, &settings.log_level)?;
    info!(
        data_dir = %settings.data_dir.display(),
        database = %settings.database.display(),
        "Starting ingestion"
    );

    if !cli.json {
        println!("Ingesting weather data...");
        println!("Input directory: {}", settings.data_dir.display());
        println!("Database: {}", settings.database.display());
    }

    let mut store = WeatherStore::open(&settings.database).map_err(|e| {
        error!("Could not open database {}: {}", settings.database.display(), e);
        e
    })?;

    let progress = ProgressReporter::new_spinner("Reading station files...", cli.quiet || cli.json);
    let report = IngestPipeline::new(&settings.data_dir).run(&mut store, Some(&progress));
    progress.finish_with_message(&format!("Inserted {} records", report.records_inserted));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{}", report.summary());
    }

    if report.has_failures() {
        return Err(ProcessingError::StageFailed {
            failed: report.failures.len(),
        });
    }

    if !cli.json {
        println!("Ingestion complete!");
    }
    Ok(())
}
