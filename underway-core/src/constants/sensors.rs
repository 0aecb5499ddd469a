//! Sensor Acceptance Ranges
//!
//! Readings outside these ranges are not rejected; the affected field group is
//! replaced with the missing sentinel and the row is kept. The limits are wide
//! on purpose: they catch instrument dropouts and placeholder values, not
//! subtle geophysical anomalies.

// ===== BATHYMETRY =====

/// Shallowest acceptable corrected depth (m).
///
/// Negative depths come from uncorrected transducer offsets or sign errors.
pub const DEPTH_MIN_M: f64 = 0.0;

/// Deepest acceptable corrected depth (m).
///
/// Challenger Deep is just under 11 km; 99999 is the five-digit field limit
/// of the exchange format, so anything beyond it is a fill value.
pub const DEPTH_MAX_M: f64 = 99999.0;

// ===== MAGNETICS =====

/// Lowest acceptable total magnetic field (nT).
///
/// Earth's main field never drops below roughly 22000 nT at the surface; values
/// under 9999 indicate a magnetometer that has lost lock.
pub const MAG_TOTAL_FIELD_MIN_NT: f64 = 9999.0;

/// Highest acceptable total magnetic field (nT).
///
/// Polar maxima are near 67000 nT.
pub const MAG_TOTAL_FIELD_MAX_NT: f64 = 80000.0;

// ===== GRAVITY =====

/// Lowest acceptable observed gravity (mGal).
///
/// Equatorial sea-level gravity is about 978000 mGal.
pub const GRAVITY_OBSERVED_MIN_MGAL: f64 = 970000.0;

/// Highest acceptable observed gravity (mGal).
///
/// Polar sea-level gravity is about 983200 mGal.
pub const GRAVITY_OBSERVED_MAX_MGAL: f64 = 990000.0;

// ===== NAVIGATION =====

/// Nautical miles per degree of latitude (one arc minute per mile).
///
/// Flat-earth approximation used by the speed-outlier filter; good to a few
/// tenths of a percent over the short legs between consecutive fixes.
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;
