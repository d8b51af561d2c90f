//! Person linkage pipeline with explicit stages.
//!
//! The stages run in order, each taking the previous stage's full output:
//! 1. **Ingest**: read at most `max_records` raw rows from the source
//! 2. **Validate**: filter rows and project them to `(first_name, last_name)`
//! 3. **Link**: relate people whose last names share a hyphen segment
//! 4. **Output**: write the relation map to the report file
//!
//! Recoverable failures (unreadable input, unwritable report) are logged and
//! collected in [`RunResult::errors`]; they never abort the run.

use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use kinlink_ingest::{CsvRecordSource, RecordSource};
use kinlink_link::RelationFinder;
use kinlink_model::{EventLog, PersonKey, RawRecord, RelationMap, TracingLog};
use kinlink_report::{ReportFormat, WriteSummary, write_report};
use kinlink_validate::{Cleaned, FieldValidator, ValidationOptions};

use crate::types::{RunConfig, RunResult};

static INGEST_LOG: TracingLog = TracingLog::new("ingest");
static VALIDATE_LOG: TracingLog = TracingLog::new("validate");
static LINK_LOG: TracingLog = TracingLog::new("link");
static REPORT_LOG: TracingLog = TracingLog::new("report");

/// Log collaborator handed to each stage.
#[derive(Clone, Copy)]
pub struct StageLogs<'a> {
    pub ingest: &'a dyn EventLog,
    pub validate: &'a dyn EventLog,
    pub link: &'a dyn EventLog,
    pub report: &'a dyn EventLog,
}

impl StageLogs<'static> {
    /// `tracing` loggers tagged with each stage name.
    pub fn tracing() -> Self {
        Self {
            ingest: &INGEST_LOG,
            validate: &VALIDATE_LOG,
            link: &LINK_LOG,
            report: &REPORT_LOG,
        }
    }
}

impl<'a> StageLogs<'a> {
    /// Route every stage to the same log.
    pub fn shared(log: &'a dyn EventLog) -> Self {
        Self {
            ingest: log,
            validate: log,
            link: log,
            report: log,
        }
    }
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

#[derive(Debug, Default)]
pub struct IngestResult {
    pub records: Vec<RawRecord>,
    pub errors: Vec<String>,
}

/// Fetch records from `source`; a read failure leaves the record list empty.
pub fn ingest(
    source: &mut dyn RecordSource,
    max_records: usize,
    log: &dyn EventLog,
) -> IngestResult {
    match source.fetch(max_records, log) {
        Ok(records) => IngestResult {
            records,
            errors: Vec::new(),
        },
        Err(error) => {
            log.error(&format!("Unable to read records: {error}"));
            IngestResult {
                records: Vec::new(),
                errors: vec![format!("ingest: {error}")],
            }
        }
    }
}

// ============================================================================
// Stage 2: Validate
// ============================================================================

pub fn validate(
    records: Vec<RawRecord>,
    options: ValidationOptions,
    log: &dyn EventLog,
) -> Cleaned {
    FieldValidator::new(options).clean_with_report(records, log)
}

// ============================================================================
// Stage 3: Link
// ============================================================================

pub fn link(people: &[PersonKey], log: &dyn EventLog) -> RelationMap {
    RelationFinder::new().link(people, log)
}

// ============================================================================
// Stage 4: Output
// ============================================================================

#[derive(Debug, Default)]
pub struct OutputResult {
    pub summary: WriteSummary,
    pub errors: Vec<String>,
}

/// Write the report; an unwritable destination is logged, not returned.
pub fn output(
    path: &Path,
    relations: &RelationMap,
    format: ReportFormat,
    log: &dyn EventLog,
) -> OutputResult {
    match write_report(path, relations, format, log) {
        Ok(summary) => OutputResult {
            summary,
            errors: Vec::new(),
        },
        Err(error) => {
            log.error(&format!("Unable to write report: {error}"));
            OutputResult {
                summary: WriteSummary {
                    path: path.to_path_buf(),
                    ..WriteSummary::default()
                },
                errors: vec![format!("output: {error}")],
            }
        }
    }
}

/// Run every stage against the CSV file named in `config`.
pub fn run(config: &RunConfig) -> RunResult {
    let mut source = CsvRecordSource::new(&config.input);
    run_with_source(&mut source, config, StageLogs::tracing())
}

/// Run every stage against an arbitrary record source.
pub fn run_with_source(
    source: &mut dyn RecordSource,
    config: &RunConfig,
    logs: StageLogs<'_>,
) -> RunResult {
    let run_start = Instant::now();
    let mut errors = Vec::new();

    let ingested = info_span!("ingest", input = %config.input.display()).in_scope(|| {
        let start = Instant::now();
        let result = ingest(source, config.max_records, logs.ingest);
        info!(
            records = result.records.len(),
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        result
    });
    errors.extend(ingested.errors);
    let records_read = ingested.records.len();

    let cleaned = info_span!("validate").in_scope(|| {
        let start = Instant::now();
        let cleaned = validate(ingested.records, config.validation, logs.validate);
        info!(
            people = cleaned.people.len(),
            malformed = cleaned.report.malformed,
            duration_ms = start.elapsed().as_millis(),
            "validate complete"
        );
        cleaned
    });

    let relations = info_span!("link").in_scope(|| {
        let start = Instant::now();
        let relations = link(&cleaned.people, logs.link);
        info!(
            related = relations.len(),
            duration_ms = start.elapsed().as_millis(),
            "link complete"
        );
        relations
    });

    let written = info_span!("report", output = %config.output.display()).in_scope(|| {
        let start = Instant::now();
        let result = output(&config.output, &relations, config.format, logs.report);
        info!(
            lines = result.summary.lines_written,
            failures = result.summary.failures,
            duration_ms = start.elapsed().as_millis(),
            "report complete"
        );
        result
    });
    errors.extend(written.errors);

    info!(
        errors = errors.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "pipeline complete"
    );

    RunResult {
        input: config.input.clone(),
        output: config.output.clone(),
        records_read,
        validation: cleaned.report,
        people: cleaned.people.len(),
        related: relations.len(),
        write: written.summary,
        errors,
    }
}
