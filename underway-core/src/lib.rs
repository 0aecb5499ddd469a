//! Core merge engine for underway geophysical data
//!
//! Merges independently sampled navigation, depth, magnetics and gravity
//! logs into one time-aligned stream of MGD77-style rows. Samples from
//! different sensors that fall within 0.06 s of each other land in the same
//! row; out-of-range readings are carried as missing values rather than
//! dropping the row.
//!
//! Pipeline:
//! - `stream` reads and validates one kind's log, one record at a time
//! - `cursor` holds each stream's next record and suppresses duplicates
//! - `merge` picks the records that share each round's reference instant
//! - `composite` folds them into one row
//! - `format` writes the row as text or JSON Lines
//!
//! ```no_run
//! use std::io;
//! use underway_core::{
//!     format::{OutputFormat, RecordWriter},
//!     merge::Merger,
//!     records::StreamKind,
//!     stream::RecordReader,
//!     config::ValidationLimits,
//! };
//!
//! # fn main() -> underway_core::Result<()> {
//! let limits = ValidationLimits::default();
//! let mut merger = Merger::builder("KM1609")
//!     .stream(StreamKind::Navigation, RecordReader::open(StreamKind::Navigation, "nav.txt", limits)?)
//!     .stream(StreamKind::Depth, RecordReader::open(StreamKind::Depth, "depth.txt", limits)?)
//!     .build()?;
//!
//! let mut writer = RecordWriter::new(io::stdout().lock(), OutputFormat::Text);
//! writer.write_header()?;
//! merger.run(|row| Ok(writer.write_record(row)?))?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod composite;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod errors;
pub mod format;
pub mod merge;
pub mod records;
pub mod speed;
pub mod stream;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use composite::{CompositeRecord, Identifiers, Row};
pub use config::{MergeConfig, ValidationLimits};
pub use errors::{MergeError, ParseError, Result, ValidationError, ValidationResult};
pub use merge::{MergeStats, Merger, MergerBuilder};
pub use records::{Measurement, StreamKind};
pub use traits::{Stream, SurveyRecord, Validator};
pub use validators::{DepthValidator, GravityValidator, MagneticsValidator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
