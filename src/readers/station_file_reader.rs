use crate::error::{ProcessingError, Result};
use crate::models::WeatherRecord;
use crate::store::WeatherStore;
use crate::utils::constants::{DATE_FORMAT, EXPECTED_COLUMNS, FIELD_DELIMITER, MISSING_VALUE};
use crate::utils::filename::{is_station_file, station_id_from_path};
use crate::utils::progress::ProgressReporter;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// New records found in a data directory, plus what was skipped on the way
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub records: Vec<WeatherRecord>,
    pub stats: ReadStats,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReadStats {
    pub files_read: usize,
    pub files_failed: usize,
    pub rows_existing: usize,
    pub rows_rejected: usize,
}

pub struct StationFileReader;

impl StationFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every `<station>.txt` in `dir`, keeping rows whose date is not yet stored.
    ///
    /// A missing directory yields an empty outcome. Unreadable files and bad
    /// rows are logged and skipped.
    pub fn read_directory(
        &self,
        dir: &Path,
        store: &WeatherStore,
        progress: Option<&ProgressReporter>,
    ) -> ReadOutcome {
        info!("Reading station files from {}", dir.display());
        let mut outcome = ReadOutcome::default();

        let files = match Self::list_station_files(dir) {
            Ok(files) => files,
            Err(ProcessingError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                error!("Folder not found: {}", dir.display());
                return outcome;
            }
            Err(e) => {
                error!("Could not list {}: {}", dir.display(), e);
                return outcome;
            }
        };

        for path in files {
            if let Some(p) = progress {
                p.set_message(&format!("Reading {}", path.display()));
            }

            match self.read_file(&path, store, &mut outcome) {
                Ok(()) => outcome.stats.files_read += 1,
                Err(e) => {
                    error!("Error processing file {}: {}", path.display(), e);
                    outcome.stats.files_failed += 1;
                }
            }
        }

        if outcome.records.is_empty() {
            info!("No new records to insert");
        }

        outcome
    }

    fn list_station_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && is_station_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn read_file(
        &self,
        path: &Path,
        store: &WeatherStore,
        outcome: &mut ReadOutcome,
    ) -> Result<()> {
        let station = station_id_from_path(path).ok_or_else(|| {
            ProcessingError::InvalidFormat(format!("Invalid file path: {}", path.display()))
        })?;
        info!("Processing file: {}", path.display());

        let mut known_dates = store.existing_dates(&station)?;
        // Station files are unquoted: a stray `"` stays inside its own field.
        // Blank lines are dropped by the csv reader and are not counted as rejected.
        let mut reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_path(path)?;

        let mut new_rows = 0;
        for result in reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    error!("Error reading row in {}: {}", path.display(), e);
                    outcome.stats.rows_rejected += 1;
                    continue;
                }
            };

            let record = match parse_row(&row, &station) {
                Ok(record) => record,
                Err(e) => {
                    error!("Error processing row: {:?} - {}", row, e);
                    outcome.stats.rows_rejected += 1;
                    continue;
                }
            };

            // insert() is false for a date already stored or seen earlier in this file
            if known_dates.insert(record.date) {
                outcome.records.push(record);
                new_rows += 1;
            } else {
                debug!("Record already exists: {} {}", station, record.date);
                outcome.stats.rows_existing += 1;
            }
        }

        if new_rows == 0 {
            debug!("No new rows in {}", path.display());
        }
        Ok(())
    }
}

impl Default for StationFileReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse `date, max_temp, min_temp, precipitation`; extra trailing columns are ignored.
pub fn parse_row(row: &StringRecord, station: &str) -> Result<WeatherRecord> {
    if row.len() < EXPECTED_COLUMNS {
        return Err(ProcessingError::InvalidFormat(format!(
            "Expected {} columns, found {}",
            EXPECTED_COLUMNS,
            row.len()
        )));
    }

    let date = NaiveDate::parse_from_str(&row[0], DATE_FORMAT)?;
    let record = WeatherRecord::new(
        station.to_string(),
        date,
        parse_measurement(&row[1])?,
        parse_measurement(&row[2])?,
        parse_measurement(&row[3])?,
    );
    validator::Validate::validate(&record)?;

    Ok(record)
}

fn parse_measurement(value: &str) -> Result<Option<i32>> {
    let parsed = value.parse::<i32>().map_err(|_| {
        ProcessingError::InvalidFormat(format!("Invalid measurement: '{}'", value))
    })?;
    Ok((parsed != MISSING_VALUE).then_some(parsed))
}
