//! Merge configuration
//!
//! Defaults reproduce the standard merge exactly; the builder methods exist
//! for reprocessing campaigns with unusual instruments.
//!
//! ```rust
//! use underway_core::config::{MergeConfig, ValidationLimits};
//! use underway_core::validators::DepthValidator;
//!
//! let config = MergeConfig::default()
//!     .with_limits(ValidationLimits::default().with_depth(DepthValidator::new_with_limits(0.0, 12000.0)))
//!     .with_survey_line("L042");
//! assert_eq!(config.survey_line, "L042");
//! ```

use crate::{
    constants::{
        mgd77::{DEFAULT_STATION, DEFAULT_SURVEY_LINE},
        TOLERANCE_YEARS,
    },
    validators::{DepthValidator, GravityValidator, MagneticsValidator},
};

/// Acceptance ranges for each governing quantity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationLimits {
    /// Corrected depth
    pub depth: DepthValidator,
    /// Magnetic total field
    pub magnetics: MagneticsValidator,
    /// Observed gravity
    pub gravity: GravityValidator,
}

impl ValidationLimits {
    /// Replace the depth validator
    pub fn with_depth(mut self, validator: DepthValidator) -> Self {
        self.depth = validator;
        self
    }

    /// Replace the magnetics validator
    pub fn with_magnetics(mut self, validator: MagneticsValidator) -> Self {
        self.magnetics = validator;
        self
    }

    /// Replace the gravity validator
    pub fn with_gravity(mut self, validator: GravityValidator) -> Self {
        self.gravity = validator;
        self
    }
}

/// Runtime settings for one merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergeConfig {
    /// Coincidence tolerance in fractional years
    pub tolerance: f64,
    /// Range validation for readers opened through
    /// [`MergerBuilder::open`](crate::merge::MergerBuilder::open)
    pub limits: ValidationLimits,
    /// Survey line identifier carried into every row
    pub survey_line: String,
    /// Station / shot point identifier carried into every row
    pub station: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE_YEARS,
            limits: ValidationLimits::default(),
            survey_line: DEFAULT_SURVEY_LINE.to_string(),
            station: DEFAULT_STATION.to_string(),
        }
    }
}

impl MergeConfig {
    /// Override the coincidence tolerance (fractional years)
    ///
    /// Negative values are treated as their magnitude.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Override the validation limits
    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Override the survey line identifier
    pub fn with_survey_line(mut self, line: impl Into<String>) -> Self {
        self.survey_line = line.into();
        self
    }

    /// Override the station identifier
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }
}
