//! Tolerance-window merge of up to four streams
//!
//! ## Algorithm
//!
//! Each round:
//!
//! 1. Refill every cursor whose record was merged last round
//! 2. Stop if no cursor holds a record
//! 3. Reference instant = earliest held record (navigation, depth,
//!    magnetics, gravity break ties in that order)
//! 4. Every cursor whose record lies within `[ref - tol, ref + tol]` is
//!    consumed and folded into the composite row, in precedence order
//! 5. The row is handed to the caller
//!
//! Cursors outside the window keep their record for a later round. Since the
//! earliest cursor is always inside its own window, every round consumes at
//! least one record, and each record lands in exactly one row.
//!
//! ## Example
//!
//! ```rust
//! use underway_core::config::ValidationLimits;
//! use underway_core::merge::Merger;
//! use underway_core::records::StreamKind;
//! use underway_core::stream::MemoryStream;
//!
//! let limits = ValidationLimits::default();
//! let nav = [StreamKind::Navigation.parse_line("2016 342 00 00 00 000 *gpo -7.0 -175.0", &limits).unwrap().0];
//! let depth = [StreamKind::Depth.parse_line("2016 342 00 00 00 030 -7.0 -175.0 4000", &limits).unwrap().0];
//!
//! let mut merger = Merger::builder("KM1609")
//!     .stream(StreamKind::Navigation, MemoryStream::new(&nav))
//!     .stream(StreamKind::Depth, MemoryStream::new(&depth))
//!     .build()
//!     .unwrap();
//!
//! let mut rows = 0;
//! let stats = merger.run(|record| {
//!     assert_eq!(record.sources().len(), 2);
//!     rows += 1;
//!     Ok(())
//! }).unwrap();
//! assert_eq!((rows, stats.rounds), (1, 1));
//! ```

use std::{fs::File, io::{self, BufReader}, path::Path};

use log::trace;

use crate::{
    composite::{CompositeRecord, Identifiers},
    config::MergeConfig,
    cursor::{Cursor, StreamStats},
    errors::{MergeError, Result},
    records::{Measurement, StreamKind},
    stream::{RecordReader, Stream, StreamError},
    time::DecimalYear,
};

/// One cursor per stream kind
pub const MAX_STREAMS: usize = StreamKind::ALL.len();

/// Counters for one merge
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeStats {
    /// Rows emitted
    pub rounds: u64,
    /// Records folded into rows, across all streams
    pub records_merged: usize,
}

/// The k-way tolerance merge
///
/// All inputs share one stream type `S`; the command line uses file readers,
/// tests and benchmarks use [`MemoryStream`](crate::stream::MemoryStream).
pub struct Merger<S> {
    /// Sorted by precedence
    cursors: heapless::Vec<Cursor<S>, MAX_STREAMS>,
    record: CompositeRecord,
    tolerance: f64,
    stats: MergeStats,
}

impl<S> Merger<S> {
    /// Create a new merger builder
    pub fn builder(cruise: impl Into<String>) -> MergerBuilder<S> {
        MergerBuilder::new(cruise)
    }

    /// Get merge statistics
    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    /// Cursors in precedence order
    pub fn cursors(&self) -> impl Iterator<Item = &Cursor<S>> {
        self.cursors.iter()
    }

    /// The cursor for one stream kind, if that stream was supplied
    pub fn cursor(&self, kind: StreamKind) -> Option<&Cursor<S>> {
        self.cursors.iter().find(|cursor| cursor.kind() == kind)
    }

    /// Per-stream counters, if that stream was supplied
    pub fn stream_stats(&self, kind: StreamKind) -> Option<&StreamStats> {
        self.cursor(kind).map(Cursor::stats)
    }

    /// Earliest held record time; earlier kinds win ties
    fn reference_instant(&self) -> Option<DecimalYear> {
        self.cursors
            .iter()
            .filter_map(Cursor::peek_time)
            .fold(None, |earliest, time| match earliest {
                Some(current) if time >= current => Some(current),
                _ => Some(time),
            })
    }
}

impl<S, E> Merger<S>
where
    S: Stream<Item = Measurement, Error = StreamError<E>>,
    MergeError: From<E>,
{
    /// Run one round and return the composed row, or `None` once every
    /// stream is exhausted
    pub fn next_round(&mut self) -> Result<Option<&CompositeRecord>> {
        let tolerance = self.tolerance;
        for cursor in self.cursors.iter_mut() {
            cursor.refill(tolerance)?;
        }

        let reference = match self.reference_instant() {
            Some(reference) => reference,
            None => return Ok(None),
        };
        trace!("round {} reference instant {:.12}", self.stats.rounds, reference.value());

        self.record.begin_round(self.stats.rounds, reference);
        for cursor in self.cursors.iter_mut() {
            let inside = cursor
                .peek_time()
                .is_some_and(|time| time.within_window(reference, tolerance));
            if !inside {
                continue;
            }
            if let Some(measurement) = cursor.consume() {
                self.record.absorb(measurement);
                self.stats.records_merged += 1;
            }
        }
        self.stats.rounds += 1;

        Ok(Some(&self.record))
    }

    /// Merge to completion, handing every row to `emit`
    pub fn run<F>(&mut self, mut emit: F) -> Result<MergeStats>
    where
        F: FnMut(&CompositeRecord) -> Result<()>,
    {
        while let Some(record) = self.next_round()? {
            emit(record)?;
        }
        Ok(self.stats.clone())
    }
}

/// Builder for [`Merger`]
pub struct MergerBuilder<S> {
    cruise: String,
    config: MergeConfig,
    streams: Vec<(StreamKind, S)>,
}

impl<S> MergerBuilder<S> {
    /// Start a merge for the given cruise
    pub fn new(cruise: impl Into<String>) -> Self {
        Self {
            cruise: cruise.into(),
            config: MergeConfig::default(),
            streams: Vec::new(),
        }
    }

    /// Replace the default configuration
    pub fn config(mut self, config: MergeConfig) -> Self {
        self.config = config;
        self
    }

    /// Add an input stream
    pub fn stream(mut self, kind: StreamKind, source: S) -> Self {
        self.streams.push((kind, source));
        self
    }
}

impl MergerBuilder<RecordReader<BufReader<File>>> {
    /// Open a log file as the `kind` stream, validated with the configured
    /// limits
    ///
    /// Set [`config`](Self::config) first; readers already opened keep the
    /// limits they were opened with.
    pub fn open(self, kind: StreamKind, path: impl AsRef<Path>) -> io::Result<Self> {
        let reader = RecordReader::open(kind, path, self.config.limits)?;
        Ok(self.stream(kind, reader))
    }
}

impl<S, E> MergerBuilder<S>
where
    S: Stream<Item = Measurement, Error = StreamError<E>>,
    MergeError: From<E>,
{
    /// Check the stream set and read the first record of every stream
    pub fn build(self) -> Result<Merger<S>> {
        let identifiers =
            Identifiers::new(&self.cruise, &self.config.survey_line, &self.config.station)?;

        let mut streams = self.streams;
        if streams.is_empty() {
            return Err(MergeError::NoStreams);
        }
        if streams.len() > MAX_STREAMS {
            return Err(MergeError::TooManyStreams { max: MAX_STREAMS });
        }
        streams.sort_by_key(|(kind, _)| kind.precedence());
        if let Some(pair) = streams.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(MergeError::DuplicateStream(pair[0].0));
        }

        let tolerance = self.config.tolerance;
        let mut cursors = heapless::Vec::new();
        for (kind, source) in streams {
            let cursor = Cursor::open(kind, source, tolerance)?;
            if cursors.push(cursor).is_err() {
                return Err(MergeError::TooManyStreams { max: MAX_STREAMS });
            }
        }

        Ok(Merger {
            cursors,
            record: CompositeRecord::new(identifiers),
            tolerance,
            stats: MergeStats::default(),
        })
    }
}
