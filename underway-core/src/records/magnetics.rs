//! Total-field magnetometer readings

use crate::{
    composite::Row,
    config::ValidationLimits,
    constants::{mgd77::MISSING_F32, MISSING},
    errors::{ParseError, ValidationError},
    traits::{SurveyRecord, Validator},
};

use super::{Fields, Fix, StreamKind};

/// A corrected magnetics sample
///
/// Layout: `epoch latitude longitude total-field anomaly diurnal sensor-depth`.
/// Anomaly and sensor depth are single-precision in the exchange format.
#[derive(Debug, Clone, Copy)]
pub struct MagneticReading {
    /// Timestamp and position
    pub fix: Fix,
    /// Total field, leading sensor (nT)
    pub total_field: f64,
    /// Residual magnetic anomaly (nT)
    pub anomaly: f32,
    /// Diurnal correction (nT)
    pub diurnal: f64,
    /// Sensor depth or altitude (m)
    pub sensor_depth: f32,
}

impl SurveyRecord for MagneticReading {
    const KIND: StreamKind = StreamKind::Magnetics;

    fn parse(fields: &mut Fields<'_>) -> Result<Self, ParseError> {
        let epoch = fields.epoch()?;
        let fix = Fix::parse_position(epoch, fields)?;

        Ok(Self {
            fix,
            total_field: fields.next("total field")?,
            anomaly: fields.next("anomaly")?,
            diurnal: fields.next("diurnal correction")?,
            sensor_depth: fields.next("sensor depth")?,
        })
    }

    fn fix(&self) -> &Fix {
        &self.fix
    }

    /// The whole group goes when the total field is bad; the anomaly and
    /// diurnal values are derived from it.
    fn sanitize(&mut self, limits: &ValidationLimits) -> Option<ValidationError> {
        let violation = limits.magnetics.validate(self.total_field).err()?;
        self.total_field = MISSING;
        self.anomaly = MISSING_F32;
        self.diurnal = MISSING;
        self.sensor_depth = MISSING_F32;
        Some(violation)
    }

    fn contribute(&self, row: &mut Row) {
        self.fix.contribute(row);
        row.total_field_1 = self.total_field;
        row.anomaly = self.anomaly;
        row.diurnal = self.diurnal;
        row.sensor_depth = self.sensor_depth;
    }
}
