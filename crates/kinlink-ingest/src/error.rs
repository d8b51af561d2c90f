//! Error types for person record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the input table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream could not be read past `line`.
    #[error("failed to parse CSV {origin} at line {line}: {message}")]
    CsvParse {
        origin: String,
        line: u64,
        message: String,
    },

    /// A single row is not valid UTF-8; the rows after it are still readable.
    #[error("row at line {line} of {origin} is not valid UTF-8")]
    InvalidUtf8 { origin: String, line: u64 },
}

impl IngestError {
    /// Map a file-open failure, keeping "not found" distinct from other I/O errors.
    pub(crate) fn open(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    /// True for errors confined to one row.
    pub fn is_row_error(&self) -> bool {
        matches!(self, Self::InvalidUtf8 { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
