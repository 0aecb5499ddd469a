//! Time-Related Constants
//!
//! Conversion factors used by the fractional-year temporal model and the
//! tolerance that decides when two samples describe the same instant.

// ===== TIME UNIT CONVERSIONS =====

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Hours per day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Seconds per hour, used by the speed filter to turn seconds into hours.
pub const SECONDS_PER_HOUR: f64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per second; input timestamps carry a separate millisecond column.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Denominator base of the fractional-year formula.
///
/// The year fraction is divided by `366 + leap` rather than the true year
/// length. Output compatibility with existing merged files depends on this
/// exact value; it is not a calendar constant and must not be reused as one.
pub const YEAR_FRACTION_BASE_DAYS: f64 = 366.0;

// ===== TOLERANCE =====

/// Coincidence tolerance in years.
///
/// 0.06 seconds expressed as a fraction of a 365.24 day year
/// (0.06 / 60 / 60 / 24 / 365.24). 0.06 s (0.001 min) is the finest time
/// resolution the MGD77 exchange format can carry, so two samples closer
/// than this cannot be told apart in the merged output.
///
/// Source: MGD77 format description, minute field `mm.xxx`
pub const TOLERANCE_YEARS: f64 = 1.90134e-9;

/// The tolerance expressed in seconds, for log messages.
pub const TOLERANCE_SECONDS: f64 = 0.06;
