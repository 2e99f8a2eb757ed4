use crate::error::Result;
use crate::models::{Statistic, WeatherRecord};
use crate::store::schema::SCHEMA;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::HashSet;
use std::path::Path;

/// SQLite-backed persistence for weather records and yearly statistics
pub struct WeatherStore {
    conn: Connection,
}

impl WeatherStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.bootstrap()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.bootstrap()?;
        Ok(store)
    }

    fn bootstrap(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Dates already stored for a station
    pub fn existing_dates(&self, station: &str) -> Result<HashSet<NaiveDate>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date FROM weather_records WHERE station = ?1")?;
        let dates = stmt
            .query_map(params![station], |row| row.get::<_, NaiveDate>(0))?
            .collect::<std::result::Result<HashSet<_>, _>>()?;
        Ok(dates)
    }

    /// Insert all records in one transaction; returns the number of rows written.
    ///
    /// A record whose (station, date) is already stored is ignored.
    pub fn insert_weather_records(&mut self, records: &[WeatherRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO weather_records
                    (station, date, maximum_temperature, minimum_temperature, precipitation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for record in records {
                inserted += stmt.execute(params![
                    record.station,
                    record.date,
                    record.maximum_temperature,
                    record.minimum_temperature,
                    record.precipitation,
                ])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    /// Per (station, year) means and totals over records with every measurement present
    pub fn yearly_aggregates(&self) -> Result<Vec<Statistic>> {
        let mut stmt = self.conn.prepare(
            "SELECT station,
                    CAST(strftime('%Y', date) AS INTEGER) AS year,
                    AVG(maximum_temperature),
                    AVG(minimum_temperature),
                    SUM(precipitation)
             FROM weather_records
             WHERE maximum_temperature IS NOT NULL
               AND minimum_temperature IS NOT NULL
               AND precipitation IS NOT NULL
             GROUP BY station, year
             ORDER BY station, year",
        )?;
        let stats = stmt
            .query_map([], Self::map_statistic)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stats)
    }

    pub fn statistic_exists(&self, station: &str, year: i32) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM statistics WHERE station = ?1 AND year = ?2",
                params![station, year],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Insert all statistics in one transaction; returns the number of rows written.
    pub fn insert_statistics(&mut self, stats: &[Statistic]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO statistics
                    (station, year, average_max_temperature, average_min_temperature,
                     total_precipitation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for stat in stats {
                inserted += stmt.execute(params![
                    stat.station,
                    stat.year,
                    stat.average_max_temperature,
                    stat.average_min_temperature,
                    stat.total_precipitation,
                ])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    pub fn count_weather_records(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM weather_records", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn count_statistics(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM statistics", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn weather_records_for(&self, station: &str) -> Result<Vec<WeatherRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT station, date, maximum_temperature, minimum_temperature, precipitation
             FROM weather_records
             WHERE station = ?1
             ORDER BY date",
        )?;
        let records = stmt
            .query_map(params![station], |row| {
                Ok(WeatherRecord::new(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub fn statistics(&self) -> Result<Vec<Statistic>> {
        let mut stmt = self.conn.prepare(
            "SELECT station, year, average_max_temperature, average_min_temperature,
                    total_precipitation
             FROM statistics
             ORDER BY station, year",
        )?;
        let stats = stmt
            .query_map([], Self::map_statistic)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(stats)
    }

    fn map_statistic(row: &Row<'_>) -> rusqlite::Result<Statistic> {
        Ok(Statistic::new(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(
        station: &str,
        y: i32,
        m: u32,
        d: u32,
        vals: (Option<i32>, Option<i32>, Option<i32>),
    ) -> WeatherRecord {
        WeatherRecord::new(
            station.to_string(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            vals.0,
            vals.1,
            vals.2,
        )
    }

    #[test]
    fn test_bootstrap_is_idempotent() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("weather.db");

        let mut store = WeatherStore::open(&path)?;
        store.insert_weather_records(&[record("USC001", 1985, 1, 1, (Some(1), Some(0), Some(0)))])?;
        drop(store);

        let store = WeatherStore::open(&path)?;
        assert_eq!(store.count_weather_records()?, 1);
        Ok(())
    }

    #[test]
    fn test_insert_ignores_existing_station_date() -> Result<()> {
        let mut store = WeatherStore::in_memory()?;
        let first = record("USC001", 1985, 1, 1, (Some(100), Some(-50), Some(0)));
        let again = record("USC001", 1985, 1, 1, (Some(999), Some(999), Some(999)));
        let other_station = record("USC002", 1985, 1, 1, (Some(1), Some(1), Some(1)));

        assert_eq!(store.insert_weather_records(&[first.clone()])?, 1);
        assert_eq!(store.insert_weather_records(&[again, other_station])?, 1);

        assert_eq!(store.weather_records_for("USC001")?, vec![first]);
        Ok(())
    }

    #[test]
    fn test_existing_dates_round_trip_nulls() -> Result<()> {
        let mut store = WeatherStore::in_memory()?;
        let records = vec![
            record("USC001", 1985, 1, 1, (Some(100), Some(-50), Some(0))),
            record("USC001", 1985, 1, 2, (None, Some(-50), Some(10))),
            record("USC002", 1985, 1, 3, (Some(1), Some(1), Some(1))),
        ];
        store.insert_weather_records(&records)?;

        let dates = store.existing_dates("USC001")?;
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&NaiveDate::from_ymd_opt(1985, 1, 2).unwrap()));
        assert!(store.existing_dates("USC999")?.is_empty());

        let stored = store.weather_records_for("USC001")?;
        assert_eq!(stored[1].maximum_temperature, None);
        Ok(())
    }

    #[test]
    fn test_yearly_aggregates_skip_incomplete_rows() -> Result<()> {
        let mut store = WeatherStore::in_memory()?;
        store.insert_weather_records(&[
            record("USC001", 1985, 1, 1, (Some(100), Some(-50), Some(0))),
            record("USC001", 1985, 6, 1, (Some(300), Some(150), Some(20))),
            record("USC001", 1985, 1, 2, (None, Some(-50), Some(10))),
            record("USC001", 1986, 1, 1, (Some(50), Some(-10), Some(5))),
            record("USC001", 1987, 1, 1, (Some(50), Some(-10), None)),
        ])?;

        let stats = store.yearly_aggregates()?;
        assert_eq!(
            stats,
            vec![
                Statistic::new("USC001".to_string(), 1985, 200.0, 50.0, 20),
                Statistic::new("USC001".to_string(), 1986, 50.0, -10.0, 5),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_statistics_unique_per_station_year() -> Result<()> {
        let mut store = WeatherStore::in_memory()?;
        let stat = Statistic::new("USC001".to_string(), 1985, 1.0, 2.0, 3);

        assert!(!store.statistic_exists("USC001", 1985)?);
        assert_eq!(store.insert_statistics(&[stat.clone()])?, 1);
        assert!(store.statistic_exists("USC001", 1985)?);
        assert!(!store.statistic_exists("USC001", 1986)?);

        assert_eq!(store.insert_statistics(&[stat])?, 0);
        assert_eq!(store.count_statistics()?, 1);
        Ok(())
    }
}
