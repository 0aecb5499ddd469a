//! Gravimeter validator
//!
//! Observed gravity governs the group; Eötvös and free-air are derived from it.

use crate::{
    constants::sensors::{GRAVITY_OBSERVED_MAX_MGAL, GRAVITY_OBSERVED_MIN_MGAL},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Observed gravity validator (mGal)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityValidator {
    min_mgal: f64,
    max_mgal: f64,
}

impl Default for GravityValidator {
    fn default() -> Self {
        Self {
            min_mgal: GRAVITY_OBSERVED_MIN_MGAL,
            max_mgal: GRAVITY_OBSERVED_MAX_MGAL,
        }
    }
}

impl GravityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        let (min_mgal, max_mgal) = utils::ordered(min, max);
        Self { min_mgal, max_mgal }
    }
}

impl Validator for GravityValidator {
    type Value = f64;

    fn validate(&self, value: f64) -> ValidationResult<()> {
        utils::check_finite_range(value, self.min_mgal, self.max_mgal)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_mgal,
            max_value: self.max_mgal,
        }
    }
}
