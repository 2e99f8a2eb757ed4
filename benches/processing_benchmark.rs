use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csv::StringRecord;
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;
use wx_ingest::processors::IngestPipeline;
use wx_ingest::readers::station_file_reader::parse_row;
use wx_ingest::store::WeatherStore;

// One tab-delimited station file with `days` rows, every tenth max temp missing
fn create_station_file(days: usize) -> String {
    let base_date = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
    let mut content = String::new();
    for day in 0..days {
        let date = base_date + chrono::Duration::days(day as i64);
        let max = if day % 10 == 0 { -9999 } else { 150 + (day % 100) as i32 };
        let _ = writeln!(
            content,
            "{}\t{:>5}\t{:>5}\t{:>5}",
            date.format("%Y%m%d"),
            max,
            -20 + (day % 50) as i32,
            day % 30
        );
    }
    content
}

fn benchmark_parse_row(c: &mut Criterion) {
    let row = StringRecord::from(vec!["19850101", "100", "-50", "0"]);
    let missing = StringRecord::from(vec!["19850102", "-9999", "-50", "10"]);

    c.bench_function("parse_row", |b| {
        b.iter(|| {
            black_box(parse_row(black_box(&row), "USC001").ok());
            black_box(parse_row(black_box(&missing), "USC001").ok());
        })
    });
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_pipeline");

    for station_count in [1usize, 10] {
        let temp_dir = TempDir::new().unwrap();
        let content = create_station_file(3650);
        for station in 0..station_count {
            fs::write(temp_dir.path().join(format!("USC{:05}.txt", station)), &content).unwrap();
        }
        let pipeline = IngestPipeline::new(temp_dir.path());

        group.bench_with_input(
            BenchmarkId::new("stations", station_count),
            &station_count,
            |b, _| {
                b.iter(|| {
                    let mut store = WeatherStore::in_memory().unwrap();
                    black_box(pipeline.run(&mut store, None))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_row, benchmark_pipeline);
criterion_main!(benches);
