//! Navigation speed-outlier filter
//!
//! A cleaning pass run over a navigation track before merging. Each fix is
//! compared with the most recent fix that has not been rejected; when the
//! implied speed exceeds the threshold, one end of the pair is dropped:
//!
//! - the newer fix, if the track was moving at a plausible speed before it
//!   (a single bad fix jumping away), or
//! - the older fix, if the previous leg was already too fast (the bad fix was
//!   the earlier one and the track is now returning to normal)
//!
//! Distances use a flat-earth approximation (1 arc minute = 1 nautical mile,
//! longitude scaled by the cosine of latitude), adequate for the few seconds
//! between consecutive fixes.

use core::fmt;

use crate::{
    constants::{sensors::NAUTICAL_MILES_PER_DEGREE, time::SECONDS_PER_HOUR},
    errors::ParseError,
    records::Fields,
};

/// One navigation fix in filter input form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSample {
    /// Seconds since any fixed epoch
    pub seconds: f64,
    /// Decimal degrees
    pub latitude: f64,
    /// Decimal degrees
    pub longitude: f64,
}

/// A fix that survived filtering, with the speed over the leg into it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredSample {
    /// The fix as read
    pub sample: NavSample,
    /// Knots
    pub speed: f64,
}

impl fmt::Display for FilteredSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} {:.6} {:.6} {:.1}",
            self.sample.seconds, self.sample.latitude, self.sample.longitude, self.speed
        )
    }
}

/// Speed in knots from `from` to `to`
///
/// Returns `f32::MAX` (widened) when both fixes share a timestamp, and a
/// negative speed when `to` is earlier than `from`.
pub fn speed_knots(from: &NavSample, to: &NavSample) -> f64 {
    let hours = (to.seconds - from.seconds) / SECONDS_PER_HOUR;
    if hours == 0.0 {
        return f64::from(f32::MAX);
    }

    let dy = (to.latitude - from.latitude) * NAUTICAL_MILES_PER_DEGREE;
    let dx = (to.longitude - from.longitude) * NAUTICAL_MILES_PER_DEGREE * libm::cos(to.latitude.to_radians());
    let distance = libm::sqrt(dx * dx + dy * dy);

    distance / hours
}

/// Threshold filter over a navigation track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedFilter {
    threshold: f32,
}

impl SpeedFilter {
    /// Reject legs faster than `threshold` knots; zero disables rejection
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Compute speeds without rejecting anything
    pub fn unlimited() -> Self {
        Self::new(0.0)
    }

    /// Threshold in knots
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    fn is_limited(&self) -> bool {
        self.threshold != 0.0
    }

    /// Threshold widened for comparison with leg speeds
    fn limit(&self) -> f64 {
        f64::from(self.threshold)
    }

    /// Run the filter, returning the surviving fixes in input order
    pub fn apply(&self, samples: &[NavSample]) -> Vec<FilteredSample> {
        let mut speeds = vec![0.0f64; samples.len()];
        let mut rejected = vec![false; samples.len()];
        let limit = self.limit();
        let mut last_good_speed = 0.0f64;

        for i in 1..samples.len() {
            let Some(j) = (0..i).rev().find(|&j| !rejected[j]) else {
                continue;
            };

            let speed = speed_knots(&samples[j], &samples[i]);
            speeds[i] = speed;

            if self.is_limited() && (speed > limit || speed < 0.0) {
                if last_good_speed <= limit || speed < 0.0 {
                    rejected[i] = true;
                } else {
                    rejected[j] = true;
                }
            } else {
                last_good_speed = speed;
            }
        }

        if samples.len() > 1 {
            speeds[0] = speeds[1];
        }

        samples
            .iter()
            .zip(speeds)
            .zip(rejected)
            .filter(|((_, speed), rejected)| !rejected && (!self.is_limited() || *speed <= limit))
            .map(|((sample, speed), _)| FilteredSample { sample: *sample, speed })
            .collect()
    }
}

/// Read up to `count` `(seconds, latitude, longitude)` triples
///
/// Triples may be split across lines in any way. Fewer than `count` triples
/// is an error naming the first absent column.
pub fn read_samples(text: &str, count: usize) -> Result<Vec<NavSample>, ParseError> {
    let mut fields = Fields::new(text);
    let mut samples = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        samples.push(NavSample {
            seconds: fields.next("seconds")?,
            latitude: fields.next("latitude")?,
            longitude: fields.next("longitude")?,
        });
    }
    Ok(samples)
}
