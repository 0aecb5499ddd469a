//! Temporal model for underway samples
//!
//! Every sample is stamped with (year, ordinal day, hour, minute, second).
//! The merge compares samples on a single scalar, the fractional year, and
//! treats two instants as the same when they differ by no more than the
//! tolerance (0.06 s, see [`TOLERANCE_YEARS`]).
//!
//! The fractional year divides by `366 + leap` for every year. That is not a
//! calendar-exact year fraction; it is kept bit-for-bit so merged files stay
//! comparable with those produced by earlier tooling.

use serde::Serialize;

use crate::constants::time::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_MINUTE, YEAR_FRACTION_BASE_DAYS,
};
pub use crate::constants::time::TOLERANCE_YEARS;

/// Days per month in a common year
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Convert a timestamp to its fractional-year value
///
/// `year + (day + ((second/60 + minute)/60 + hour)/24) / (366 + leap)`
pub fn fractional_year(year: i32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let leap = if is_leap_year(year) { 1.0 } else { 0.0 };
    let day_fraction =
        ((second / SECONDS_PER_MINUTE + f64::from(minute)) / MINUTES_PER_HOUR + f64::from(hour))
            / HOURS_PER_DAY;

    f64::from(year) + (f64::from(day) + day_fraction) / (YEAR_FRACTION_BASE_DAYS + leap)
}

/// Calendar month and day-of-month for an ordinal day
///
/// Walks the month table until the running total would reach the ordinal day.
/// Days past the end of the year land in month 13 rather than wrapping.
pub fn month_and_day(day: u32, year: i32) -> (u32, u32) {
    let mut months = MONTH_DAYS;
    if is_leap_year(year) {
        months[1] += 1;
    }

    let mut elapsed = 0;
    let mut month = 0;
    while month < months.len() && elapsed + months[month] < day {
        elapsed += months[month];
        month += 1;
    }

    (month as u32 + 1, day - elapsed)
}

/// A scalar instant in fractional years
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DecimalYear(f64);

impl DecimalYear {
    /// Wrap a raw fractional-year value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw fractional-year value
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Signed distance from an earlier instant, in years
    pub fn since(self, earlier: DecimalYear) -> f64 {
        self.0 - earlier.0
    }

    /// `|self - other| <= tolerance`
    pub fn coincides_with(self, other: DecimalYear, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }

    /// `reference - tolerance <= self <= reference + tolerance`
    ///
    /// Two comparisons rather than `coincides_with`: the edges round differently.
    pub fn within_window(self, reference: DecimalYear, tolerance: f64) -> bool {
        self.0 >= reference.0 - tolerance && self.0 <= reference.0 + tolerance
    }

    /// True when this instant carries no new information over `previous`
    ///
    /// Anything less than `tolerance` after the previous kept sample counts,
    /// including samples that step backwards in time.
    pub fn is_indistinct_from(self, previous: DecimalYear, tolerance: f64) -> bool {
        self.since(previous) < tolerance
    }
}

/// Timestamp fields of one sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Epoch {
    /// Four-digit year
    pub year: i32,
    /// Ordinal day, 1 = January 1st
    pub day: u32,
    /// Hour of day
    pub hour: u32,
    /// Minute of hour
    pub minute: u32,
    /// Seconds including the millisecond fraction
    pub second: f64,
}

impl Epoch {
    /// Build an epoch from the whole-second and millisecond columns
    pub fn from_parts(year: i32, day: u32, hour: u32, minute: u32, seconds: f64, millis: i32) -> Self {
        Self {
            year,
            day,
            hour,
            minute,
            second: seconds + f64::from(millis) / crate::constants::time::MS_PER_SECOND,
        }
    }

    /// Fractional-year value of this epoch
    pub fn decimal_year(&self) -> DecimalYear {
        DecimalYear(fractional_year(self.year, self.day, self.hour, self.minute, self.second))
    }

    /// Calendar (month, day-of-month)
    pub fn month_and_day(&self) -> (u32, u32) {
        month_and_day(self.day, self.year)
    }

    /// Minutes with the seconds folded in, as the `min.xxx` output column
    pub fn decimal_minutes(&self) -> f64 {
        f64::from(self.minute) + self.second / SECONDS_PER_MINUTE
    }
}
