//! Person record ingestion.
//!
//! Reads raw person rows from a CSV file. The first row is a header and is
//! always skipped; reading stops at the first blank row or once the requested
//! number of records has been collected.
//!
//! # Example
//!
//! ```ignore
//! use kinlink_ingest::{CsvRecordSource, RecordSource};
//! use kinlink_model::TracingLog;
//!
//! let mut source = CsvRecordSource::new("persons_raw_data.csv");
//! let records = source.fetch(1000, &TracingLog::new("ingest"))?;
//! ```

mod error;
mod reader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::CsvRows;

// === Record Sources ===
pub use source::{
    CsvRecordSource, DEFAULT_INPUT_PATH, DEFAULT_MAX_RECORDS, MemorySource, RecordSource,
};
