use std::path::PathBuf;

use kinlink_ingest::{DEFAULT_INPUT_PATH, DEFAULT_MAX_RECORDS};
use kinlink_report::{DEFAULT_OUTPUT_PATH, ReportFormat, WriteSummary};
use kinlink_validate::{ValidationOptions, ValidationReport};

/// Settings of one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub max_records: usize,
    pub format: ReportFormat,
    pub validation: ValidationOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_records: DEFAULT_MAX_RECORDS,
            format: ReportFormat::default(),
            validation: ValidationOptions::default(),
        }
    }
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records_read: usize,
    pub validation: ValidationReport,
    /// People left after validation, duplicates included.
    pub people: usize,
    /// Display names with at least one relation.
    pub related: usize,
    pub write: WriteSummary,
    /// Recovered errors, in the order they happened.
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || self.write.failures > 0
    }
}
