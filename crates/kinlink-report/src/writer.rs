//! Writing report lines to the output artifact.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use kinlink_model::{EventLog, RelationMap};

use crate::error::{ReportError, Result};
use crate::format::{ReportFormat, format, render_json};

/// Report written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "related_persons_info.txt";

/// Outcome of writing one report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub lines_written: usize,
    pub failures: usize,
}

/// Write `relations` to `path`, truncating any previous content.
///
/// Failing to open the file is returned as [`ReportError::OutputOpen`]. Once
/// open, a failed line is logged and counted and the remaining lines are
/// still attempted.
pub fn write_report(
    path: &Path,
    relations: &RelationMap,
    format_kind: ReportFormat,
    log: &dyn EventLog,
) -> Result<WriteSummary> {
    let mut file = File::create(path).map_err(|source| ReportError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = match format_kind {
        ReportFormat::Text => write_lines(&mut file, path, format(relations), log),
        ReportFormat::Json => {
            write_lines(&mut file, path, std::iter::once(render_json(relations)?), log)
        }
    };
    log.info(&format!(
        "Wrote {} lines to {}",
        summary.lines_written,
        path.display()
    ));
    Ok(summary)
}

/// Write each line to `writer`, continuing past individual failures.
///
/// `path` only labels messages and the returned summary.
pub fn write_lines<W: Write>(
    writer: &mut W,
    path: &Path,
    lines: impl IntoIterator<Item = String>,
    log: &dyn EventLog,
) -> WriteSummary {
    let mut summary = WriteSummary {
        path: path.to_path_buf(),
        ..WriteSummary::default()
    };
    for (idx, line) in lines.into_iter().enumerate() {
        match writer.write_all(line.as_bytes()) {
            Ok(()) => summary.lines_written += 1,
            Err(source) => {
                summary.failures += 1;
                let error = ReportError::LineWrite {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    source,
                };
                log.error(&error.to_string());
            }
        }
    }
    if let Err(error) = writer.flush() {
        log.error(&format!("failed to flush {}: {error}", path.display()));
    }
    summary
}
