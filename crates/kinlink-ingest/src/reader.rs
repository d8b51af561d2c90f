//! Lazy CSV row iteration with header skip and blank-row stop.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use kinlink_model::RawRecord;

use crate::error::{IngestError, Result};

/// Finite, non-restartable sequence of data rows from a CSV source.
///
/// The first row is treated as a header and never yielded. Iteration ends at
/// end of input or at the first blank line, whichever comes first. A row of
/// empty fields such as `,,` is data, not a blank line. `\n`, `\r\n` and a
/// bare `\r` all end a line.
///
/// A row that is not valid UTF-8 is yielded as [`IngestError::InvalidUtf8`]
/// and iteration continues; any other error ends it.
pub struct CsvRows<R> {
    reader: csv::Reader<Tape<R>>,
    record: ByteRecord,
    origin: String,
    /// Line-break bytes that ended the previous record.
    pending_breaks: Vec<u8>,
    header_skipped: bool,
    finished: bool,
}

impl CsvRows<File> {
    /// Open `path` for reading.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
        Ok(Self::with_origin(file, path.display().to_string()))
    }
}

impl<R: Read> CsvRows<R> {
    pub fn from_reader(reader: R) -> Self {
        Self::with_origin(reader, "<reader>".to_string())
    }

    fn with_origin(reader: R, origin: String) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(Tape::new(reader));
        Self {
            reader,
            record: ByteRecord::new(),
            origin,
            pending_breaks: Vec::new(),
            header_skipped: false,
            finished: false,
        }
    }

    /// Read the next record into `self.record`.
    ///
    /// Returns `None` at end of input, otherwise whether a blank line came
    /// between this record and the one before it.
    fn read_record(&mut self) -> Result<Option<bool>> {
        let start = self.reader.position().byte();
        let found = self
            .reader
            .read_byte_record(&mut self.record)
            .map_err(|e| IngestError::CsvParse {
                origin: self.origin.clone(),
                line: self.reader.position().line(),
                message: e.to_string(),
            })?;
        if !found {
            return Ok(None);
        }
        let end = self.reader.position().byte();

        // The reader skips blank lines without reporting them, so look at the
        // raw bytes: every record's slice is its leading skipped breaks, its
        // content, then its own terminator.
        let tape = self.reader.get_mut();
        let raw = tape.slice(start, end);
        let leading = raw.iter().take_while(|b| is_break(**b)).count();
        let trailing = raw[leading..]
            .iter()
            .rev()
            .take_while(|b| is_break(**b))
            .count();
        let mut between = std::mem::take(&mut self.pending_breaks);
        between.extend_from_slice(&raw[..leading]);
        self.pending_breaks = raw[raw.len() - trailing..].to_vec();
        tape.release(end);

        Ok(Some(line_breaks(&between) > 1))
    }

    fn next_row(&mut self) -> Result<Option<RawRecord>> {
        if !self.header_skipped {
            self.header_skipped = true;
            if self.read_record()?.is_none() {
                return Ok(None);
            }
        }

        match self.read_record()? {
            None | Some(true) => Ok(None),
            Some(false) => self.decode().map(Some),
        }
    }

    fn decode(&self) -> Result<RawRecord> {
        let fields = self
            .record
            .iter()
            .map(|field| std::str::from_utf8(field).map(str::to_string))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| IngestError::InvalidUtf8 {
                origin: self.origin.clone(),
                line: self.record.position().map_or(0, csv::Position::line),
            })?;
        Ok(RawRecord::new(fields))
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = !error.is_row_error();
                Some(Err(error))
            }
        }
    }
}

fn is_break(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Number of line endings in `bytes`, counting `\r\n` once.
fn line_breaks(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
            idx += 1;
        }
        count += 1;
        idx += 1;
    }
    count
}

/// Keeps the bytes handed to the CSV reader until they are released, so
/// record boundaries can be inspected.
struct Tape<R> {
    inner: R,
    /// Stream offset of `bytes[0]`.
    base: u64,
    bytes: Vec<u8>,
}

impl<R> Tape<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            base: 0,
            bytes: Vec::new(),
        }
    }

    fn slice(&self, start: u64, end: u64) -> &[u8] {
        let from = usize::try_from(start.saturating_sub(self.base)).unwrap_or(usize::MAX);
        let to = usize::try_from(end.saturating_sub(self.base)).unwrap_or(usize::MAX);
        let to = to.min(self.bytes.len());
        &self.bytes[from.min(to)..to]
    }

    /// Forget everything before stream offset `upto`.
    fn release(&mut self, upto: u64) {
        let count = usize::try_from(upto.saturating_sub(self.base))
            .unwrap_or(usize::MAX)
            .min(self.bytes.len());
        self.bytes.drain(..count);
        self.base += count as u64;
    }
}

impl<R: Read> Read for Tape<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.bytes.extend_from_slice(&buf[..read]);
        Ok(read)
    }
}
