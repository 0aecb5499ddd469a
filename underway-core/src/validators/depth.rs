//! Bathymetry validator
//!
//! Corrected depth must be non-negative and fit the five-digit depth field.

use crate::{
    constants::sensors::{DEPTH_MAX_M, DEPTH_MIN_M},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Corrected depth validator (metres)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthValidator {
    min_m: f64,
    max_m: f64,
}

impl Default for DepthValidator {
    fn default() -> Self {
        Self {
            min_m: DEPTH_MIN_M,
            max_m: DEPTH_MAX_M,
        }
    }
}

impl DepthValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        let (min_m, max_m) = utils::ordered(min, max);
        Self { min_m, max_m }
    }
}

impl Validator for DepthValidator {
    type Value = f64;

    fn validate(&self, value: f64) -> ValidationResult<()> {
        utils::check_finite_range(value, self.min_m, self.max_m)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_m,
            max_value: self.max_m,
        }
    }
}
