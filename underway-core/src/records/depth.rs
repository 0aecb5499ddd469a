//! Corrected bathymetry soundings

use crate::{
    composite::Row,
    config::ValidationLimits,
    constants::MISSING,
    errors::{ParseError, ValidationError},
    traits::{SurveyRecord, Validator},
};

use super::{Fields, Fix, StreamKind};

/// A corrected depth sounding
///
/// Layout: `epoch latitude longitude depth [two-way-travel-time]`. Corrected
/// depth files usually omit the travel time; it is then missing.
#[derive(Debug, Clone, Copy)]
pub struct Sounding {
    /// Timestamp and position
    pub fix: Fix,
    /// Corrected depth (m)
    pub depth: f64,
    /// Two-way travel time (s)
    pub travel_time: f64,
}

impl SurveyRecord for Sounding {
    const KIND: StreamKind = StreamKind::Depth;

    fn parse(fields: &mut Fields<'_>) -> Result<Self, ParseError> {
        let epoch = fields.epoch()?;
        let fix = Fix::parse_position(epoch, fields)?;
        let depth = fields.next("depth")?;
        let travel_time = fields.optional("two-way travel time")?.unwrap_or(MISSING);

        Ok(Self { fix, depth, travel_time })
    }

    fn fix(&self) -> &Fix {
        &self.fix
    }

    fn sanitize(&mut self, limits: &ValidationLimits) -> Option<ValidationError> {
        let violation = limits.depth.validate(self.depth).err()?;
        self.depth = MISSING;
        Some(violation)
    }

    fn contribute(&self, row: &mut Row) {
        self.fix.contribute(row);
        row.depth = self.depth;
        row.travel_time = self.travel_time;
    }
}
