//! Per-stream read position
//!
//! A cursor owns one stream and holds at most one record from it: the next
//! record not yet merged. It also remembers the time of the last record it
//! handed to the merge, which drives duplicate suppression.
//!
//! ```text
//!            consume()              refill()
//!   held ──────────────► pending ─────────────► held'    (next distinct record)
//!                                       └─────► inactive (end of stream)
//! ```
//!
//! Refilling is deferred until the next round so the row that consumed the
//! record is emitted before the stream is read again.

use log::{debug, info};

use crate::{
    errors::{MergeError, Result},
    records::{Measurement, StreamKind},
    stream::{Stream, StreamError},
    time::DecimalYear,
};

/// Counters for one cursor
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StreamStats {
    /// Records pulled from the stream
    pub records_read: usize,
    /// Records dropped because they were not distinct in time
    pub duplicates_suppressed: usize,
    /// Records folded into an output row
    pub records_merged: usize,
}

/// Read position over one stream
pub struct Cursor<S> {
    kind: StreamKind,
    source: S,
    held: Option<Measurement>,
    /// Time of the last record handed to the merge
    previous: Option<DecimalYear>,
    pending_refill: bool,
    stats: StreamStats,
}

impl<S, E> Cursor<S>
where
    S: Stream<Item = Measurement, Error = StreamError<E>>,
    MergeError: From<E>,
{
    /// Wrap a stream and read its first record
    ///
    /// A stream that is empty from the start yields an inactive cursor.
    pub fn open(kind: StreamKind, source: S, tolerance: f64) -> Result<Self> {
        let mut cursor = Self {
            kind,
            source,
            held: None,
            previous: None,
            pending_refill: false,
            stats: StreamStats::default(),
        };
        cursor.advance(tolerance)?;
        Ok(cursor)
    }

    /// Hand the held record to the merge and schedule a refill
    pub fn consume(&mut self) -> Option<&Measurement> {
        let record = self.held.as_ref()?;
        self.previous = Some(record.time());
        self.pending_refill = true;
        self.stats.records_merged += 1;
        Some(record)
    }

    /// Read the next distinct record if the held one was consumed
    pub fn refill(&mut self, tolerance: f64) -> Result<()> {
        if !self.pending_refill {
            return Ok(());
        }
        self.pending_refill = false;
        self.held = None;
        self.advance(tolerance)
    }

    /// Pull records until one is distinct from the last merged record
    fn advance(&mut self, tolerance: f64) -> Result<()> {
        loop {
            let record = match self.source.poll_next() {
                Ok(record) => record,
                Err(nb::Error::WouldBlock) => continue,
                Err(nb::Error::Other(StreamError::EndOfStream)) => {
                    info!(
                        "{} stream exhausted after {} merged records",
                        self.kind, self.stats.records_merged
                    );
                    return Ok(());
                }
                Err(nb::Error::Other(StreamError::Transport(e))) => return Err(e.into()),
                Err(nb::Error::Other(StreamError::Malformed { kind, line, source })) => {
                    return Err(MergeError::Malformed { kind, line, source })
                }
            };

            if record.kind() != self.kind {
                return Err(MergeError::KindMismatch { expected: self.kind, found: record.kind() });
            }
            self.stats.records_read += 1;

            if let Some(previous) = self.previous {
                if record.time().is_indistinct_from(previous, tolerance) {
                    self.stats.duplicates_suppressed += 1;
                    debug!(
                        "{} record {} suppressed, {:.3e} years after the previous one",
                        self.kind,
                        self.stats.records_read,
                        record.time().since(previous)
                    );
                    continue;
                }
            }

            self.held = Some(record);
            return Ok(());
        }
    }
}

impl<S> Cursor<S> {
    /// Stream kind
    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// True while the cursor holds a record or owes a refill
    pub fn is_active(&self) -> bool {
        self.held.is_some()
    }

    /// The record waiting to be merged
    pub fn held(&self) -> Option<&Measurement> {
        self.held.as_ref()
    }

    /// Time of the held record
    pub fn peek_time(&self) -> Option<DecimalYear> {
        self.held.as_ref().map(Measurement::time)
    }

    /// The underlying stream
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get statistics
    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationLimits;
    use crate::constants::TOLERANCE_YEARS;
    use crate::stream::MemoryStream;

    fn nav(second: u32, millis: u32) -> Measurement {
        let line = format!("2016 342 00 00 {second:02} {millis:03} *gpo -7.0 -175.0");
        StreamKind::Navigation.parse_line(&line, &ValidationLimits::default()).unwrap().0
    }

    fn drain(cursor: &mut Cursor<MemoryStream<'_>>) -> Vec<Measurement> {
        let mut out = Vec::new();
        while let Some(record) = cursor.consume().copied() {
            out.push(record);
            cursor.refill(TOLERANCE_YEARS).unwrap();
        }
        out
    }

    #[test]
    fn empty_stream_starts_inactive() {
        let cursor = Cursor::open(StreamKind::Navigation, MemoryStream::new(&[]), TOLERANCE_YEARS).unwrap();
        assert!(!cursor.is_active());
        assert!(cursor.peek_time().is_none());
    }

    #[test]
    fn suppresses_records_within_tolerance_of_the_previous() {
        let records = [nav(0, 0), nav(0, 30), nav(0, 500), nav(0, 520), nav(1, 0)];
        let mut cursor = Cursor::open(StreamKind::Navigation, MemoryStream::new(&records), TOLERANCE_YEARS).unwrap();

        let kept = drain(&mut cursor);
        let millis: Vec<_> = kept.iter().map(|r| (r.fix().epoch.second * 1000.0).round() as u32).collect();
        assert_eq!(millis, vec![0, 500, 1000]);
        assert_eq!(cursor.stats().duplicates_suppressed, 2);
        assert_eq!(cursor.stats().records_read, 5);
        assert_eq!(cursor.stats().records_merged, 3);
    }

    #[test]
    fn suppresses_backward_steps() {
        let records = [nav(5, 0), nav(4, 0), nav(6, 0)];
        let mut cursor = Cursor::open(StreamKind::Navigation, MemoryStream::new(&records), TOLERANCE_YEARS).unwrap();
        assert_eq!(drain(&mut cursor).len(), 2);
    }

    #[test]
    fn first_record_is_never_suppressed() {
        let records = [nav(0, 0)];
        let cursor = Cursor::open(StreamKind::Navigation, MemoryStream::new(&records), TOLERANCE_YEARS).unwrap();
        assert!(cursor.is_active());
    }

    #[test]
    fn refill_without_consume_keeps_the_held_record() {
        let records = [nav(0, 0), nav(1, 0)];
        let mut cursor = Cursor::open(StreamKind::Navigation, MemoryStream::new(&records), TOLERANCE_YEARS).unwrap();
        let before = cursor.peek_time();
        cursor.refill(TOLERANCE_YEARS).unwrap();
        assert_eq!(cursor.peek_time(), before);
    }

    #[test]
    fn rejects_records_of_another_kind() {
        let records = [nav(0, 0)];
        let result = Cursor::open(StreamKind::Depth, MemoryStream::new(&records), TOLERANCE_YEARS);
        assert!(matches!(
            result,
            Err(MergeError::KindMismatch { expected: StreamKind::Depth, found: StreamKind::Navigation })
        ));
    }
}
