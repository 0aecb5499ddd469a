//! Measurement Records for the Four Underway Stream Kinds
//!
//! ## Overview
//!
//! A survey ship logs each sensor family to its own file at its own rate:
//!
//! | Kind       | Typical rate | Governing quantity        | Invalidation group                       |
//! |------------|--------------|---------------------------|------------------------------------------|
//! | navigation | 2 Hz         | (none)                    | (none)                                   |
//! | depth      | 0.1–1 Hz     | corrected depth           | depth                                    |
//! | magnetics  | 10 Hz        | total field 1             | total field, anomaly, diurnal, sensor depth |
//! | gravity    | 1 Hz         | observed gravity          | observed, Eötvös, free-air               |
//!
//! Every record carries a [`Fix`] (timestamp and position) plus its
//! kind-specific readings. The closed set of kinds is the [`Measurement`] enum;
//! each variant's layout, validation and contribution to the merged row live
//! with its type through the [`SurveyRecord`] trait, so the merge engine never
//! branches on kind itself.
//!
//! ## Line Layouts
//!
//! All layouts start `year day hour minute seconds milliseconds`:
//!
//! ```text
//! navigation  2016 342 00 00 00 496 *gpo  -7.032306 -175.930304 ...
//! depth       2016 342 00 00 04 321  -7.03 -175.93 5790.45 [twt]
//! magnetics   2016 342 01 54 33 229  -7.03 -175.93 35925.875 169.9 2.76 10.0
//! gravity     2016 342 00 00 00 863  -7.03 -175.93 978123.4 12.3 -4.5
//! ```
//!
//! Columns past the last one a layout names are ignored.

mod depth;
mod fields;
mod gravity;
mod magnetics;
mod navigation;

use core::fmt;

use log::debug;
use serde::Serialize;

pub use depth::Sounding;
pub use fields::Fields;
pub use gravity::GravityReading;
pub use magnetics::MagneticReading;
pub use navigation::NavFix;

use crate::{
    composite::Row,
    config::ValidationLimits,
    errors::{ParseError, ValidationError},
    time::{DecimalYear, Epoch},
    traits::SurveyRecord,
};

/// The four sensor families, in output precedence order
///
/// The discriminant is the precedence: when several kinds are merged into one
/// row, later kinds overwrite the shared time and position fields of earlier
/// ones, and earlier kinds win ties when picking the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum StreamKind {
    /// Position fixes
    Navigation = 0,
    /// Bathymetry soundings
    Depth = 1,
    /// Total-field magnetometer
    Magnetics = 2,
    /// Marine gravimeter
    Gravity = 3,
}

impl StreamKind {
    /// All kinds in precedence order
    pub const ALL: [StreamKind; 4] = [
        StreamKind::Navigation,
        StreamKind::Depth,
        StreamKind::Magnetics,
        StreamKind::Gravity,
    ];

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            StreamKind::Navigation => "navigation",
            StreamKind::Depth => "depth",
            StreamKind::Magnetics => "magnetics",
            StreamKind::Gravity => "gravity",
        }
    }

    /// Position in the precedence order
    pub const fn precedence(&self) -> usize {
        *self as usize
    }

    /// Parse one line of this kind's layout and apply its range validation
    ///
    /// Returns the record together with the validation failure, if any, that
    /// caused a field group to be replaced with the missing sentinel.
    pub fn parse_line(
        &self,
        line: &str,
        limits: &ValidationLimits,
    ) -> Result<(Measurement, Option<ValidationError>), ParseError> {
        let mut fields = Fields::new(line);
        match self {
            StreamKind::Navigation => read::<NavFix>(&mut fields, limits),
            StreamKind::Depth => read::<Sounding>(&mut fields, limits),
            StreamKind::Magnetics => read::<MagneticReading>(&mut fields, limits),
            StreamKind::Gravity => read::<GravityReading>(&mut fields, limits),
        }
    }
}

fn read<R>(
    fields: &mut Fields<'_>,
    limits: &ValidationLimits,
) -> Result<(Measurement, Option<ValidationError>), ParseError>
where
    R: SurveyRecord + Into<Measurement>,
{
    let mut record = R::parse(fields)?;
    let violation = record.sanitize(limits);
    if let Some(violation) = violation {
        debug!("{} record at {:?} invalidated: {}", R::KIND, record.fix().epoch, violation);
    }

    let measurement: Measurement = record.into();
    debug_assert_eq!(measurement.kind(), R::KIND);
    Ok((measurement, violation))
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timestamp and position shared by every record kind
#[derive(Debug, Clone, Copy)]
pub struct Fix {
    /// Calendar timestamp as logged
    pub epoch: Epoch,
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// Fractional-year value of `epoch`, computed once at parse time
    pub time: DecimalYear,
}

impl Fix {
    /// Build a fix and compute its temporal value
    pub fn new(epoch: Epoch, latitude: f64, longitude: f64) -> Self {
        Self {
            epoch,
            latitude,
            longitude,
            time: epoch.decimal_year(),
        }
    }

    /// Read latitude and longitude columns
    pub(crate) fn parse_position(epoch: Epoch, fields: &mut Fields<'_>) -> Result<Self, ParseError> {
        let latitude = fields.next("latitude")?;
        let longitude = fields.next("longitude")?;
        Ok(Self::new(epoch, latitude, longitude))
    }

    /// Overwrite the row's shared time and position fields
    pub(crate) fn contribute(&self, row: &mut Row) {
        row.time = Some(self.time);
        row.epoch = self.epoch;
        row.latitude = self.latitude;
        row.longitude = self.longitude;
    }
}

/// One parsed sample from any stream kind
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub enum Measurement {
    Navigation(NavFix),
    Depth(Sounding),
    Magnetics(MagneticReading),
    Gravity(GravityReading),
}

impl Measurement {
    /// Which stream this sample belongs to
    pub const fn kind(&self) -> StreamKind {
        match self {
            Measurement::Navigation(_) => StreamKind::Navigation,
            Measurement::Depth(_) => StreamKind::Depth,
            Measurement::Magnetics(_) => StreamKind::Magnetics,
            Measurement::Gravity(_) => StreamKind::Gravity,
        }
    }

    /// Timestamp and position
    pub fn fix(&self) -> &Fix {
        match self {
            Measurement::Navigation(r) => r.fix(),
            Measurement::Depth(r) => r.fix(),
            Measurement::Magnetics(r) => r.fix(),
            Measurement::Gravity(r) => r.fix(),
        }
    }

    /// Fractional-year value
    pub fn time(&self) -> DecimalYear {
        self.fix().time
    }

    /// Write this sample's fields into a merged row
    pub fn contribute(&self, row: &mut Row) {
        match self {
            Measurement::Navigation(r) => r.contribute(row),
            Measurement::Depth(r) => r.contribute(row),
            Measurement::Magnetics(r) => r.contribute(row),
            Measurement::Gravity(r) => r.contribute(row),
        }
    }
}

impl From<NavFix> for Measurement {
    fn from(record: NavFix) -> Self {
        Measurement::Navigation(record)
    }
}

impl From<Sounding> for Measurement {
    fn from(record: Sounding) -> Self {
        Measurement::Depth(record)
    }
}

impl From<MagneticReading> for Measurement {
    fn from(record: MagneticReading) -> Self {
        Measurement::Magnetics(record)
    }
}

impl From<GravityReading> for Measurement {
    fn from(record: GravityReading) -> Self {
        Measurement::Gravity(record)
    }
}
