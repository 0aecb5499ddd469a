//! Pull-based record sources
//!
//! Record sources follow a pull-based model using the `nb` crate: the merge
//! scheduler asks each cursor's stream for exactly one record when, and only
//! when, the previous one has been consumed.
//!
//! ## Design Philosophy
//!
//! - **Pull-based**: The scheduler decides which stream advances
//! - **One record at a time**: Streams are never read ahead
//! - **Sticky end**: Once `EndOfStream` is returned it is returned forever
//!
//! ## Common Patterns
//!
//! ```rust
//! use underway_core::stream::{MemoryStream, StreamError};
//! use underway_core::traits::Stream;
//!
//! fn count<S, E>(stream: &mut S) -> Result<usize, StreamError<E>>
//! where
//!     S: Stream<Error = StreamError<E>>,
//! {
//!     let mut n = 0;
//!     loop {
//!         match stream.poll_next() {
//!             Ok(_) => n += 1,
//!             Err(nb::Error::WouldBlock) => continue,
//!             Err(nb::Error::Other(StreamError::EndOfStream)) => return Ok(n),
//!             Err(nb::Error::Other(e)) => return Err(e),
//!         }
//!     }
//! }
//!
//! let mut empty = MemoryStream::new(&[]);
//! assert_eq!(count(&mut empty).unwrap(), 0);
//! ```

/// A source the merge pulls records from, one at a time
///
/// `nb::Error::WouldBlock` means "ask again"; `nb::Error::Other` carries end
/// of stream, malformed input or a transport failure.
pub trait Stream {
    /// Record type
    type Item;

    /// Terminal condition, usually a [`StreamError`](crate::stream::StreamError)
    type Error;

    /// Pull the next record
    fn poll_next(&mut self) -> nb::Result<Self::Item, Self::Error>;

    /// Lower and optional upper bound on the records left; unknown by default
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}
