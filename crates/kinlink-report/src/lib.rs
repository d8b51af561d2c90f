//! Related-persons report output.
//!
//! The text report has one line per related person:
//! `"First Last: Match1, Match2 \n"`, with a single space before the newline.
//! Lines follow the relation map's insertion order.

mod error;
mod format;
mod writer;

pub use error::{ReportError, Result};
pub use format::{ReportFormat, format, format_line, render_json};
pub use writer::{DEFAULT_OUTPUT_PATH, WriteSummary, write_lines, write_report};
