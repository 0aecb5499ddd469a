//! MGD77 Output Constants
//!
//! Fixed fields and "no data" sentinels for the merged exchange row.

/// Missing numeric value.
///
/// NaN rather than zero: zero is a legitimate anomaly, diurnal or Eötvös value.
/// Printed as `nan` in text output and `null` in JSON output.
pub const MISSING: f64 = f64::NAN;

/// Missing single-precision value (magnetic anomaly, sensor depth).
pub const MISSING_F32: f32 = f32::NAN;

/// Missing single-character code (position type, bathymetric type,
/// magnetic sensor, navigation quality).
pub const MISSING_CODE: char = '9';

/// Missing bathymetric correction code (two characters).
pub const MISSING_BATHY_CORRECTION: &str = "99";

/// Data record type; every merged row is a type 5 record.
pub const RECORD_TYPE: u8 = 5;

/// Time zone correction; input is always UTC.
pub const TIME_ZONE: i32 = 0;

/// Default survey line identifier (five-character field).
pub const DEFAULT_SURVEY_LINE: &str = "99999";

/// Default station / shot point identifier (six-character field).
pub const DEFAULT_STATION: &str = "999999";

/// Longest identifier the row can carry.
pub const MAX_IDENTIFIER_LEN: usize = 32;

/// Column header of the text output.
pub const TEXT_HEADER: &str = "#rec\tTZ\tyear\tmonth\tday\thour\tmin.xxx lat\t\tlon\t\tptc\ttwt\tdepth\tbcc\tbtc\tmtf1\tmtf2\tmag\tmsens\tdiur\tmsd\tgobs\teot\tfaa\tnqc\tid\tsln\tsspn";
