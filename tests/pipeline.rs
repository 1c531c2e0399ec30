//! Generate -> read -> load workflow against the in-memory sink.
//!
//! 1. Generate a CSV file with a fixed seed
//! 2. Read it back through the CSV source
//! 3. Load it into a `MemorySink`
//! 4. Compare the committed rows with the generated ones

use bronze_sink::{BronzeSink, MemorySink};
use ed_bronze::load_visits;
use ed_csv_source::{read_visits, CsvSourceError};
use ed_generator::{GeneratorConfig, VisitGenerator};
use ed_populate_csv::CSVPopulator;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HEADER: &str =
    "patient_id,arrival_time,acuity_level,age_group,chief_complaint,wait_time_minutes,length_of_stay_hours";

fn generate(dir: &Path, config: GeneratorConfig) -> PathBuf {
    let path = dir.join("ed_visits_synthetic.csv");
    CSVPopulator::new(config).unwrap().populate(&path).unwrap();
    path
}

#[test]
fn test_default_run_writes_301_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = generate(temp_dir.path(), GeneratorConfig::default());

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 301);
    assert_eq!(lines[0], HEADER);
}

#[test]
fn test_generated_file_reads_back_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = generate(temp_dir.path(), GeneratorConfig::default());

    let visits = read_visits(&path).unwrap();

    assert_eq!(visits.len(), 300);
    assert!(visits.iter().all(|v| (1..=5).contains(&v.acuity_level.get())));
    assert!(visits
        .windows(2)
        .all(|pair| pair[0].arrival_time <= pair[1].arrival_time));
}

#[tokio::test]
async fn test_round_trip_field_for_field() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default();
    let path = generate(temp_dir.path(), config.clone());
    let expected = VisitGenerator::new(config).unwrap().generate_sorted();

    let visits = read_visits(&path).unwrap();
    let mut sink = MemorySink::new();
    let report = load_visits(&mut sink, &visits).await.unwrap();

    assert_eq!(report.rows_inserted, 300);
    assert_eq!(report.verified_count, 300);
    assert_eq!(report.sample.as_slice(), &expected[..3]);
    assert_eq!(sink.rows(), expected.as_slice());
}

#[tokio::test]
async fn test_loading_twice_replaces_rows() {
    let temp_dir = TempDir::new().unwrap();
    let path = generate(temp_dir.path(), GeneratorConfig::default().with_row_count(75));
    let visits = read_visits(&path).unwrap();

    let mut sink = MemorySink::new();
    load_visits(&mut sink, &visits).await.unwrap();
    load_visits(&mut sink, &visits).await.unwrap();

    assert_eq!(sink.row_count().await.unwrap(), 75);
    assert_eq!(sink.rows(), visits.as_slice());
}

#[test]
fn test_non_numeric_wait_time_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = generate(temp_dir.path(), GeneratorConfig::default().with_row_count(5));

    // Corrupt the wait time of the third data row
    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let mut fields: Vec<&str> = lines[3].split(',').collect();
    fields[5] = "abc";
    lines[3] = fields.join(",");
    std::fs::write(&path, lines.join("\n")).unwrap();

    let err = read_visits(&path).unwrap_err();

    match err {
        CsvSourceError::Coercion {
            row, column, value, ..
        } => {
            assert_eq!(row, 3);
            assert_eq!(column, "wait_time_minutes");
            assert_eq!(value, "abc");
        }
        other => panic!("expected coercion error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_load_keeps_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = generate(temp_dir.path(), GeneratorConfig::default().with_row_count(100));
    let visits = read_visits(&path).unwrap();

    let mut sink = MemorySink::new();
    load_visits(&mut sink, &visits[..10]).await.unwrap();

    let mut failing = MemorySink::with_rows(sink.rows().to_vec()).fail_on_insert(51);
    let result = load_visits(&mut failing, &visits).await;

    assert!(result.is_err());
    assert_eq!(failing.rows(), &visits[..10]);
    assert!(!failing.in_transaction());
}
