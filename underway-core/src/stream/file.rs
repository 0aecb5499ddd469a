//! Line-oriented record readers
//!
//! Underway logs are plain text, one sample per line, whitespace separated.
//! A [`RecordReader`] turns one such log into a stream of validated
//! [`Measurement`]s of a single kind.
//!
//! ## Line Handling
//!
//! 1. Blank lines and lines starting with `#` are skipped
//! 2. Everything else is parsed with the kind's layout
//! 3. Out-of-range governing quantities are replaced with the missing
//!    sentinel (the record is still returned)
//! 4. A line that does not fit the layout ends the stream with
//!    [`StreamError::Malformed`] carrying its 1-based line number
//!
//! Duplicate timestamps are not filtered here; that belongs to the cursor,
//! which knows which record was last kept.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::{config::ValidationLimits, records::{Measurement, StreamKind}};

use super::{Stream, StreamError};

/// Statistics for one reader
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReaderStats {
    /// Lines consumed, including blank and comment lines
    pub lines_read: usize,
    /// Lines turned into records
    pub records_parsed: usize,
    /// Records that had a field group replaced with the missing sentinel
    pub groups_invalidated: usize,
}

/// Stream of one kind's records from a text source
///
/// ## Example
///
/// ```rust
/// use std::io::Cursor;
/// use underway_core::config::ValidationLimits;
/// use underway_core::records::StreamKind;
/// use underway_core::stream::RecordReader;
/// use underway_core::traits::Stream;
///
/// let text = "# depth log\n2016 342 00 00 04 321 -7.03 -175.93 5790.45\n";
/// let mut reader = RecordReader::new(StreamKind::Depth, Cursor::new(text), ValidationLimits::default());
///
/// let record = reader.poll_next().unwrap();
/// assert_eq!(record.fix().latitude, -7.03);
/// assert_eq!(reader.stats().lines_read, 2);
/// ```
pub struct RecordReader<R> {
    kind: StreamKind,
    reader: R,
    limits: ValidationLimits,
    /// Reused line buffer
    line: String,
    /// Set once end of input or a malformed line has been reported
    finished: bool,
    stats: ReaderStats,
}

impl RecordReader<BufReader<File>> {
    /// Open a log file for the given stream kind
    pub fn open(kind: StreamKind, path: impl AsRef<Path>, limits: ValidationLimits) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(kind, BufReader::new(file), limits))
    }
}

impl<R: BufRead> RecordReader<R> {
    /// Wrap any buffered reader
    pub fn new(kind: StreamKind, reader: R, limits: ValidationLimits) -> Self {
        Self {
            kind,
            reader,
            limits,
            line: String::new(),
            finished: false,
            stats: ReaderStats::default(),
        }
    }

    /// Stream kind this reader parses
    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Get statistics
    pub fn stats(&self) -> &ReaderStats {
        &self.stats
    }

    fn next_record(&mut self) -> Result<Measurement, StreamError<io::Error>> {
        if self.finished {
            return Err(StreamError::EndOfStream);
        }

        loop {
            self.line.clear();
            let read = self.reader.read_line(&mut self.line).map_err(|e| {
                self.finished = true;
                StreamError::Transport(e)
            })?;
            if read == 0 {
                self.finished = true;
                return Err(StreamError::EndOfStream);
            }
            self.stats.lines_read += 1;

            let text = self.line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            return match self.kind.parse_line(text, &self.limits) {
                Ok((record, violation)) => {
                    self.stats.records_parsed += 1;
                    if violation.is_some() {
                        self.stats.groups_invalidated += 1;
                    }
                    Ok(record)
                }
                Err(source) => {
                    self.finished = true;
                    Err(StreamError::Malformed {
                        kind: self.kind,
                        line: self.stats.lines_read,
                        source,
                    })
                }
            };
        }
    }
}

impl<R: BufRead> Stream for RecordReader<R> {
    type Item = Measurement;
    type Error = StreamError<io::Error>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        self.next_record().map_err(nb::Error::Other)
    }
}
