//! Integration tests for reading person records from disk.

use std::io::Write;

use kinlink_ingest::{CsvRecordSource, DEFAULT_MAX_RECORDS, IngestError, RecordSource};
use kinlink_model::{LogLevel, MemoryLog};
use tempfile::NamedTempFile;

const HEADER: &str =
    "first_name,last_name,company_name,address,city,county,state,zip,phone1,email\n";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn person_row(idx: usize) -> String {
    format!("First{idx},Last,Acme,1 Main St,Town,County,ST,00000,555-0100,p{idx}@example.com\n")
}

#[test]
fn fetch_reads_rows_after_header() {
    let file = create_temp_csv(&format!("{HEADER}{}{}", person_row(1), person_row(2)));
    let log = MemoryLog::new();

    let records = CsvRecordSource::new(file.path()).fetch(10, &log).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fields()[0], "First1");
    assert_eq!(records[1].fields()[9], "p2@example.com");
    assert!(log.contains(LogLevel::Info, "Collected 2 records"));
}

#[test]
fn fetch_caps_at_max_records() {
    let mut content = HEADER.to_string();
    for idx in 0..1500 {
        content.push_str(&person_row(idx));
    }
    let file = create_temp_csv(&content);
    let log = MemoryLog::new();

    let records = CsvRecordSource::new(file.path())
        .fetch(DEFAULT_MAX_RECORDS, &log)
        .unwrap();

    assert_eq!(records.len(), 1000);
    assert_eq!(records[0].fields()[0], "First0");
    assert_eq!(records[999].fields()[0], "First999");
}

#[test]
fn fetch_stops_at_first_blank_row() {
    let content = format!("{HEADER}{}\n{}", person_row(1), person_row(2));
    let file = create_temp_csv(&content);

    let records = CsvRecordSource::new(file.path())
        .fetch(10, &MemoryLog::new())
        .unwrap();

    assert_eq!(records.len(), 1);
}

#[test]
fn fetch_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("persons_raw_data.csv");

    let result = CsvRecordSource::new(&path).fetch(10, &MemoryLog::new());

    match result {
        Err(IngestError::FileNotFound { path: missing }) => assert_eq!(missing, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn fetch_skips_undecodable_row_and_keeps_the_rest() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HEADER.as_bytes()).unwrap();
    file.write_all(person_row(1).as_bytes()).unwrap();
    file.write_all(b"Bad,\xff\xfe,Acme,1 Main St,Town,County,ST,00000,555-0100,bad@example.com\n")
        .unwrap();
    file.write_all(person_row(3).as_bytes()).unwrap();
    let log = MemoryLog::new();

    let records = CsvRecordSource::new(file.path()).fetch(10, &log).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].fields()[0], "First1");
    assert_eq!(records[1].fields()[0], "First3");
    assert!(log.contains(LogLevel::Warn, "not valid UTF-8"));
    assert!(log.contains(LogLevel::Info, "Collected 2 records"));
}

#[test]
fn fetch_stops_at_blank_row_before_unterminated_last_row() {
    let content = format!("{HEADER}{}\n{}", person_row(1), person_row(2).trim_end());
    let file = create_temp_csv(&content);

    let records = CsvRecordSource::new(file.path())
        .fetch(10, &MemoryLog::new())
        .unwrap();

    assert_eq!(records.len(), 1);
}

#[test]
fn fetch_with_zero_cap_reads_nothing() {
    let file = create_temp_csv(&format!("{HEADER}{}", person_row(1)));

    let records = CsvRecordSource::new(file.path())
        .fetch(0, &MemoryLog::new())
        .unwrap();

    assert!(records.is_empty());
}
