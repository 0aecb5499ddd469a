//! Common Validation Utilities
//!
//! Shared range checking for the sensor validators. All functions are pure.
//!
//! ## Range Semantics
//!
//! Both bounds are inclusive: a depth of exactly 0 m or 99999 m is kept.
//! NaN and infinities are reported as `InvalidValue` before the range check,
//! so a missing governing quantity always invalidates its group.

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Check if a value is within the specified inclusive range
pub fn check_range(value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Reject non-finite values, then check the range
pub fn check_finite_range(value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if !value.is_valid() {
        return Err(ValidationError::InvalidValue);
    }
    check_range(value, min, max)
}

/// Order a (min, max) pair supplied in either order
pub fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}
