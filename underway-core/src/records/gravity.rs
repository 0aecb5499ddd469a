//! Marine gravimeter readings

use crate::{
    composite::Row,
    config::ValidationLimits,
    constants::MISSING,
    errors::{ParseError, ValidationError},
    traits::{SurveyRecord, Validator},
};

use super::{Fields, Fix, StreamKind};

/// A corrected gravity sample
///
/// Layout: `epoch latitude longitude observed-gravity eotvos free-air`.
#[derive(Debug, Clone, Copy)]
pub struct GravityReading {
    /// Timestamp and position
    pub fix: Fix,
    /// Observed gravity (mGal)
    pub observed: f64,
    /// Eötvös correction (mGal)
    pub eotvos: f64,
    /// Free-air anomaly (mGal)
    pub free_air: f64,
}

impl SurveyRecord for GravityReading {
    const KIND: StreamKind = StreamKind::Gravity;

    fn parse(fields: &mut Fields<'_>) -> Result<Self, ParseError> {
        let epoch = fields.epoch()?;
        let fix = Fix::parse_position(epoch, fields)?;

        Ok(Self {
            fix,
            observed: fields.next("observed gravity")?,
            eotvos: fields.next("eotvos")?,
            free_air: fields.next("free_air")?,
        })
    }

    fn fix(&self) -> &Fix {
        &self.fix
    }

    fn sanitize(&mut self, limits: &ValidationLimits) -> Option<ValidationError> {
        let violation = limits.gravity.validate(self.observed).err()?;
        self.observed = MISSING;
        self.eotvos = MISSING;
        self.free_air = MISSING;
        Some(violation)
    }

    fn contribute(&self, row: &mut Row) {
        self.fix.contribute(row);
        row.observed_gravity = self.observed;
        row.eotvos = self.eotvos;
        row.free_air = self.free_air;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_reading() {
        let mut record = GravityReading::parse(&mut Fields::new(
            "2016 342 00 00 00 863 -7.0 -175.9 978031.85 7.5 -12.25",
        ))
        .unwrap();
        assert!(record.sanitize(&ValidationLimits::default()).is_none());
        assert_eq!(record.observed, 978031.85);
        assert_eq!(record.free_air, -12.25);
    }

    #[test]
    fn uncalibrated_counts_invalidate_the_group() {
        // Raw meter counts, not mGal
        let mut record = GravityReading::parse(&mut Fields::new(
            "2016 342 00 00 00 863 -7.0 -175.9 126551.749715 7.5 -12.25",
        ))
        .unwrap();
        assert!(record.sanitize(&ValidationLimits::default()).is_some());
        assert!(record.observed.is_nan());
        assert!(record.eotvos.is_nan());
        assert!(record.free_air.is_nan());
    }
}
