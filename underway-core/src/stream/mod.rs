//! Record streams feeding the merge
//!
//! ## Module Organization
//!
//! - Core error type (this file)
//! - `file` - Line-oriented readers over files or any `BufRead`
//! - `memory` - Streams over in-memory slices, for tests and replay
//!
//! Every source implements [`Stream`] with `Item = Measurement` and
//! `Error = StreamError<E>`, where `E` is the source's transport error.

use core::fmt;

pub mod file;
pub mod memory;

pub use file::{ReaderStats, RecordReader};
pub use memory::MemoryStream;

pub use crate::traits::Stream;

use crate::{errors::ParseError, records::StreamKind};

/// Errors a record stream can report
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError<E> {
    /// Transport-level error (e.g., I/O error)
    Transport(E),
    /// A line does not match the stream's layout
    Malformed {
        /// Stream kind of the reader
        kind: StreamKind,
        /// 1-based line number
        line: usize,
        /// What was wrong
        source: ParseError,
    },
    /// End of stream reached
    EndOfStream,
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Malformed { kind, line, source } => {
                write!(f, "malformed {} record at line {}: {}", kind, line, source)
            }
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for StreamError<E> {}
