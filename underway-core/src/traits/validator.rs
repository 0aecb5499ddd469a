//! Validator traits
//!
//! Kept deliberately small: a validator answers one question about one
//! governing quantity. What happens to the rest of the record when the answer
//! is "no" is the record's business (see [`SurveyRecord::sanitize`]).
//!
//! [`SurveyRecord::sanitize`]: crate::traits::SurveyRecord::sanitize

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each governing quantity
pub trait Validator {
    /// Quantity type
    type Value;

    /// Accept or reject one reading
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Inclusive acceptance range
    fn constraints(&self) -> ValidatorConstraints;
}

/// Acceptance range of a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value (inclusive)
    pub min_value: f64,

    /// Maximum valid value (inclusive)
    pub max_value: f64,
}

/// Readings that can be checked for NaN and infinity
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
