//! Error Types for Underway Merging
//!
//! ## Error Categories
//!
//! ### Physical Violations (never fatal)
//! - `ValidationError::OutOfRange`: a governing quantity is outside its
//!   acceptance range (e.g. 150000 m depth). The merge replaces the field
//!   group with the missing sentinel and keeps the row.
//! - `ValidationError::InvalidValue`: NaN or infinity in a governing quantity.
//!
//! ### Input Problems (fatal)
//! - `ParseError`: a line does not match its stream's column layout.
//! - `MergeError::Malformed`: the same, with stream kind and line number.
//! - `MergeError::Io`: an input could not be read.
//!
//! ### Setup Problems (fatal, reported before any output)
//! - `MergeError::NoStreams`, `MergeError::TooManyStreams`,
//!   `MergeError::DuplicateStream`, `MergeError::InvalidIdentifier`
//!
//! ## Handling Strategy
//!
//! ```rust
//! use underway_core::{ValidationError, Validator, DepthValidator};
//!
//! let validator = DepthValidator::default();
//! match validator.validate(150000.0) {
//!     Ok(()) => {}
//!     Err(ValidationError::OutOfRange { .. }) => {
//!         // depth becomes missing, the sounding's time and position survive
//!     }
//!     Err(ValidationError::InvalidValue) => {}
//! }
//! ```

use thiserror::Error;

use crate::records::StreamKind;

/// Result type for validation operations
pub type ValidationResult<T> = core::result::Result<T, ValidationError>;

/// Result type for merge operations
pub type Result<T> = core::result::Result<T, MergeError>;

/// Validation errors - small and `Copy`, they are produced for every sample
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside physical limits
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The reading that failed validation
        value: f64,
        /// Minimum acceptable value
        min: f64,
        /// Maximum acceptable value
        max: f64,
    },

    /// Value makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

/// A line that does not fit its stream's column layout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line ended before a required column
    #[error("missing field `{field}`")]
    MissingField {
        /// Name of the absent column
        field: &'static str,
    },

    /// A column could not be read as the expected type
    #[error("invalid {field} `{value}`")]
    InvalidField {
        /// Name of the offending column
        field: &'static str,
        /// The text found there
        value: String,
    },
}

/// Errors that stop a merge
#[derive(Error, Debug)]
pub enum MergeError {
    /// No input stream was supplied
    #[error("at least one input stream is required")]
    NoStreams,

    /// More inputs than stream kinds
    #[error("at most {max} input streams are supported")]
    TooManyStreams {
        /// Capacity of the scheduler
        max: usize,
    },

    /// Two inputs claimed the same stream kind
    #[error("{0} stream supplied more than once")]
    DuplicateStream(StreamKind),

    /// Reading an input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input line does not match its layout
    #[error("malformed {kind} record at line {line}: {source}")]
    Malformed {
        /// Stream the line came from
        kind: StreamKind,
        /// 1-based line number within that stream
        line: usize,
        /// What was wrong with it
        #[source]
        source: ParseError,
    },

    /// A stream produced a record of another kind
    #[error("{expected} stream produced a {found} record")]
    KindMismatch {
        /// Kind the stream was registered as
        expected: StreamKind,
        /// Kind of the record it produced
        found: StreamKind,
    },

    /// A cruise, line or station identifier cannot be carried in the output
    #[error("invalid {field} identifier: {reason}")]
    InvalidIdentifier {
        /// Which identifier
        field: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },
}

impl From<core::convert::Infallible> for MergeError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_names_stream_and_line() {
        let err = MergeError::Malformed {
            kind: StreamKind::Gravity,
            line: 17,
            source: ParseError::MissingField { field: "free_air" },
        };
        assert_eq!(
            err.to_string(),
            "malformed gravity record at line 17: missing field `free_air`"
        );
    }

    #[test]
    fn validation_result_carries_validation_errors() {
        let failed: ValidationResult<()> = Err(ValidationError::InvalidValue);
        assert_eq!(failed, Err(ValidationError::InvalidValue));

        let merged: Result<u8> = Ok(1);
        assert!(merged.is_ok());
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::OutOfRange { value: 5000.0, min: 9999.0, max: 80000.0 };
        assert_eq!(err.to_string(), "Value 5000 outside range [9999, 80000]");
    }
}
