//! Composite Output Record
//!
//! ## Lifecycle
//!
//! One `CompositeRecord` lives for the whole merge and is reused every round:
//!
//! ```text
//! reset ──► absorb(nav) ──► absorb(depth) ──► ... ──► emit ──► reset ──► ...
//!  │            │                                       │
//!  │            └─ later kinds overwrite time/position  └─ formatter reads the
//!  └─ every field back to its sentinel                     fully composed row
//! ```
//!
//! Reset happens at the start of a round, never right after composition, so
//! the row handed to the formatter is always complete.
//!
//! The identifiers (cruise, line, station) are fixed for the run and survive
//! resets.

use heapless::String;

use crate::{
    constants::mgd77::{MAX_IDENTIFIER_LEN, MISSING_BATHY_CORRECTION, MISSING_CODE, MISSING_F32},
    constants::MISSING,
    errors::{MergeError, Result},
    records::{Measurement, StreamKind},
    time::{DecimalYear, Epoch},
};

/// Every per-round field of a merged row
///
/// Plain `Copy` data; [`Row::EMPTY`] is the single definition of the sentinel
/// state.
#[derive(Debug, Clone, Copy)]
pub struct Row {
    /// Fractional-year value of the last contributing sample
    pub time: Option<DecimalYear>,
    /// Timestamp of the last contributing sample
    pub epoch: Epoch,
    /// Decimal degrees
    pub latitude: f64,
    /// Decimal degrees
    pub longitude: f64,
    /// Position type code
    pub position_type: char,
    /// Two-way travel time (s)
    pub travel_time: f64,
    /// Corrected depth (m)
    pub depth: f64,
    /// Bathymetric correction code
    pub bathy_correction: &'static str,
    /// Bathymetric type code
    pub bathy_type: char,
    /// Total field, leading sensor (nT)
    pub total_field_1: f64,
    /// Total field, trailing sensor (nT); no input layout supplies it
    pub total_field_2: f64,
    /// Residual anomaly (nT)
    pub anomaly: f32,
    /// Magnetic sensor code
    pub mag_sensor: char,
    /// Diurnal correction (nT)
    pub diurnal: f64,
    /// Sensor depth or altitude (m)
    pub sensor_depth: f32,
    /// Observed gravity (mGal)
    pub observed_gravity: f64,
    /// Eötvös correction (mGal)
    pub eotvos: f64,
    /// Free-air anomaly (mGal)
    pub free_air: f64,
    /// Navigation quality code
    pub nav_quality: char,
}

impl Row {
    /// The "nothing measured" row every round starts from
    pub const EMPTY: Row = Row {
        time: None,
        epoch: Epoch { year: 0, day: 0, hour: 0, minute: 0, second: MISSING },
        latitude: MISSING,
        longitude: MISSING,
        position_type: MISSING_CODE,
        travel_time: MISSING,
        depth: MISSING,
        bathy_correction: MISSING_BATHY_CORRECTION,
        bathy_type: MISSING_CODE,
        total_field_1: MISSING,
        total_field_2: MISSING,
        anomaly: MISSING_F32,
        mag_sensor: MISSING_CODE,
        diurnal: MISSING,
        sensor_depth: MISSING_F32,
        observed_gravity: MISSING,
        eotvos: MISSING,
        free_air: MISSING,
        nav_quality: MISSING_CODE,
    };

    /// Copy the sentinel row over this one
    pub fn reset(&mut self) {
        *self = Row::EMPTY;
    }
}

impl Default for Row {
    fn default() -> Self {
        Row::EMPTY
    }
}

/// Bit set of the stream kinds that contributed to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceFlags(u8);

impl SourceFlags {
    /// No contributors
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Just `kind`
    pub const fn of(kind: StreamKind) -> Self {
        Self(1 << kind as u8)
    }

    /// Mark `kind` as contributing
    pub fn set(&mut self, kind: StreamKind) {
        self.0 |= Self::of(kind).0;
    }

    /// Whether `kind` contributed
    pub const fn contains(&self, kind: StreamKind) -> bool {
        self.0 & Self::of(kind).0 != 0
    }

    /// No kind contributed
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of contributing kinds
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Contributing kinds in precedence order
    pub fn iter(self) -> impl Iterator<Item = StreamKind> {
        StreamKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

/// Short identifier string carried through every row unchanged
pub type Identifier = String<MAX_IDENTIFIER_LEN>;

/// Cruise, survey line and station identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    /// Cruise identifier, e.g. `KM1609`
    pub cruise: Identifier,
    /// Survey line identifier
    pub survey_line: Identifier,
    /// Station / shot point identifier
    pub station: Identifier,
}

impl Identifiers {
    /// Validate and store the three identifiers
    ///
    /// The cruise identifier must be non-empty; all three must fit the
    /// identifier width and contain no whitespace, which would break the
    /// column layout of the text output.
    pub fn new(cruise: &str, survey_line: &str, station: &str) -> Result<Self> {
        if cruise.is_empty() {
            return Err(MergeError::InvalidIdentifier { field: "cruise", reason: "must not be empty" });
        }

        Ok(Self {
            cruise: identifier("cruise", cruise)?,
            survey_line: identifier("survey line", survey_line)?,
            station: identifier("station", station)?,
        })
    }
}

fn identifier(field: &'static str, value: &str) -> Result<Identifier> {
    if value.chars().any(char::is_whitespace) {
        return Err(MergeError::InvalidIdentifier { field, reason: "must not contain whitespace" });
    }

    let mut out = Identifier::new();
    out.push_str(value)
        .map_err(|_| MergeError::InvalidIdentifier { field, reason: "too long" })?;
    Ok(out)
}

/// The fused output row of one merge round
#[derive(Debug, Clone)]
pub struct CompositeRecord {
    row: Row,
    sources: SourceFlags,
    identifiers: Identifiers,
    round: u64,
    reference: Option<DecimalYear>,
}

impl CompositeRecord {
    /// An empty record for a run
    pub fn new(identifiers: Identifiers) -> Self {
        Self {
            row: Row::EMPTY,
            sources: SourceFlags::empty(),
            identifiers,
            round: 0,
            reference: None,
        }
    }

    /// Reset to the sentinel state for a new round
    pub fn begin_round(&mut self, round: u64, reference: DecimalYear) {
        self.row.reset();
        self.sources = SourceFlags::empty();
        self.round = round;
        self.reference = Some(reference);
    }

    /// Fold one consumed sample into the row
    ///
    /// Callers absorb samples in precedence order (navigation, depth,
    /// magnetics, gravity) so the last contributor's time and position win.
    pub fn absorb(&mut self, measurement: &Measurement) {
        debug_assert!(
            self.sources.iter().all(|kind| kind < measurement.kind()),
            "samples must be absorbed in precedence order"
        );
        measurement.contribute(&mut self.row);
        self.sources.set(measurement.kind());
    }

    /// The composed fields
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Which kinds contributed this round
    pub fn sources(&self) -> SourceFlags {
        self.sources
    }

    /// The run's identifiers
    pub fn identifiers(&self) -> &Identifiers {
        &self.identifiers
    }

    /// 0-based index of the round that produced this row
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Reference instant the round was built around
    pub fn reference(&self) -> Option<DecimalYear> {
        self.reference
    }
}
