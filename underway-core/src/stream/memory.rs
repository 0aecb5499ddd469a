//! Replay of already-parsed records
//!
//! Useful for unit tests, for benchmarks, and for replaying records that were
//! already parsed by some other front end.

use core::convert::Infallible;

use crate::records::Measurement;

use super::{Stream, StreamError};

/// Stream over a slice of already-parsed records
///
/// ## Example
///
/// ```rust
/// use underway_core::config::ValidationLimits;
/// use underway_core::records::StreamKind;
/// use underway_core::stream::MemoryStream;
/// use underway_core::traits::Stream;
///
/// let (record, _) = StreamKind::Navigation
///     .parse_line("2016 342 00 00 00 496 *gpo -7.03 -175.93", &ValidationLimits::default())
///     .unwrap();
/// let records = [record];
///
/// let mut stream = MemoryStream::new(&records);
/// assert!(stream.poll_next().is_ok());
/// assert!(stream.is_exhausted());
/// ```
pub struct MemoryStream<'a> {
    /// Slice of records to stream
    records: &'a [Measurement],
    /// Current position
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /// Replay `records` from the first one
    pub fn new(records: &'a [Measurement]) -> Self {
        Self { records, position: 0 }
    }

    /// Rewind to the first record
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Index of the next record
    pub fn position(&self) -> usize {
        self.position
    }

    /// Every record has been handed out
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.records.len()
    }
}

impl<'a> Stream for MemoryStream<'a> {
    type Item = Measurement;
    type Error = StreamError<Infallible>;

    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error> {
        let record = self
            .records
            .get(self.position)
            .copied()
            .ok_or(nb::Error::Other(StreamError::EndOfStream))?;
        self.position += 1;
        Ok(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}
