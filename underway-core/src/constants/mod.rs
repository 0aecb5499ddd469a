//! Constants for Underway Core
//!
//! Every numeric value the merge depends on is defined here with a note on
//! where it comes from. Nothing in the engine should carry a bare literal for
//! a physical limit, a time conversion or an output sentinel.
//!
//! ## Organization
//!
//! - **Time**: unit conversions and the coincidence tolerance
//! - **Sensors**: acceptance ranges for depth, magnetics and gravity
//! - **MGD77**: sentinel codes and fixed fields of the exchange row

/// Time conversions and the merge tolerance.
pub mod time;

/// Physical acceptance ranges for each sensor family.
pub mod sensors;

/// Sentinels and fixed fields of the MGD77-style output row.
pub mod mgd77;

pub use time::{TOLERANCE_YEARS, SECONDS_PER_MINUTE, MINUTES_PER_HOUR, HOURS_PER_DAY};

pub use sensors::{
    DEPTH_MIN_M, DEPTH_MAX_M,
    MAG_TOTAL_FIELD_MIN_NT, MAG_TOTAL_FIELD_MAX_NT,
    GRAVITY_OBSERVED_MIN_MGAL, GRAVITY_OBSERVED_MAX_MGAL,
};

pub use mgd77::{MISSING, MISSING_CODE, RECORD_TYPE, TIME_ZONE};
