//! Magnetometer validator
//!
//! The total field reading governs the whole magnetics group: anomaly and
//! diurnal correction are computed from it, so a total field outside the range
//! of Earth's main field takes them with it.

use crate::{
    constants::sensors::{MAG_TOTAL_FIELD_MAX_NT, MAG_TOTAL_FIELD_MIN_NT},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Total-field validator (nT)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticsValidator {
    min_nt: f64,
    max_nt: f64,
}

impl Default for MagneticsValidator {
    fn default() -> Self {
        Self {
            min_nt: MAG_TOTAL_FIELD_MIN_NT,
            max_nt: MAG_TOTAL_FIELD_MAX_NT,
        }
    }
}

impl MagneticsValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        let (min_nt, max_nt) = utils::ordered(min, max);
        Self { min_nt, max_nt }
    }
}

impl Validator for MagneticsValidator {
    type Value = f64;

    fn validate(&self, value: f64) -> ValidationResult<()> {
        utils::check_finite_range(value, self.min_nt, self.max_nt)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_nt,
            max_value: self.max_nt,
        }
    }
}
