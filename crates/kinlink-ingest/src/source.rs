//! Record sources feeding the validation stage.

use std::path::{Path, PathBuf};

use kinlink_model::{EventLog, RawRecord};

use crate::error::Result;
use crate::reader::CsvRows;

/// Input table read when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "./persons_raw_data.csv";

/// Upper bound on records taken from the source per run.
pub const DEFAULT_MAX_RECORDS: usize = 1000;

/// Produces the ordered raw records of one run.
pub trait RecordSource {
    /// Collect at most `max_count` records in source order.
    fn fetch(&mut self, max_count: usize, log: &dyn EventLog) -> Result<Vec<RawRecord>>;
}

/// Reads records from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CsvRecordSource {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

impl RecordSource for CsvRecordSource {
    /// Only failing to open the file is an error. Undecodable rows are
    /// skipped with a warning; a read failure part way through keeps the rows
    /// collected so far.
    fn fetch(&mut self, max_count: usize, log: &dyn EventLog) -> Result<Vec<RawRecord>> {
        let mut rows = CsvRows::from_path(&self.path)?;
        let mut records = Vec::new();
        while records.len() < max_count {
            match rows.next() {
                Some(Ok(record)) => records.push(record),
                Some(Err(error)) if error.is_row_error() => {
                    log.warn(&format!("Skipping row: {error}"));
                }
                Some(Err(error)) => {
                    log.error(&format!("Stopped reading early: {error}"));
                    break;
                }
                None => break,
            }
        }
        log.info(&format!(
            "Collected {} records from {}",
            records.len(),
            self.path.display()
        ));
        Ok(records)
    }
}

/// In-memory rows, without a header.
///
/// A record with no fields plays the role of a blank row and ends the data.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<RawRecord>,
}

impl MemorySource {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }
}

impl RecordSource for MemorySource {
    fn fetch(&mut self, max_count: usize, log: &dyn EventLog) -> Result<Vec<RawRecord>> {
        let records: Vec<RawRecord> = self
            .rows
            .iter()
            .take_while(|row| !row.is_empty())
            .take(max_count)
            .cloned()
            .collect();
        log.info(&format!("Collected {} records", records.len()));
        Ok(records)
    }
}
