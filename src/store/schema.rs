/// Tables owned by the ingestion command.
///
/// The unique keys back the read-then-insert dedup in the reader and the
/// aggregator: if two runs race past their existence checks, the second
/// insert of a key is ignored instead of duplicating the row.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS weather_records (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    maximum_temperature INTEGER,
    minimum_temperature INTEGER,
    precipitation INTEGER,
    UNIQUE (station, date)
);

CREATE TABLE IF NOT EXISTS statistics (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    year INTEGER NOT NULL,
    average_max_temperature REAL NOT NULL,
    average_min_temperature REAL NOT NULL,
    total_precipitation INTEGER NOT NULL,
    UNIQUE (station, year)
);
"#;
