//! Daylight intervals and the fallback policy that produces them.
//!
//! Raw solar events may be missing at high latitudes. [`resolve`] turns a set
//! of possibly-absent events into a [`DaylightInterval`] that always exists,
//! always runs forward, and never spans more than a day.

mod resolver;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::geo::day::saturating_add;

pub use resolver::resolve;

/// The part of a day treated as daylight.
///
/// Constructed through [`DaylightInterval::new`], which enforces
/// `begins <= ends` and `ends - begins <= 24h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaylightInterval {
    begins: DateTime<Utc>,
    ends: DateTime<Utc>,
}

impl DaylightInterval {
    /// Build an interval, clamping `ends` into `[begins, begins + 24h]`.
    pub fn new(begins: DateTime<Utc>, ends: DateTime<Utc>) -> Self {
        let ends = ends
            .max(begins)
            .min(saturating_add(begins, Duration::hours(24)));
        Self { begins, ends }
    }

    pub fn begins(&self) -> DateTime<Utc> {
        self.begins
    }

    pub fn ends(&self) -> DateTime<Utc> {
        self.ends
    }

    pub fn duration(&self) -> Duration {
        self.ends - self.begins
    }

    /// Duration in seconds, with millisecond resolution.
    pub fn duration_seconds(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1000.0
    }

    /// Midpoint of the interval, where the sun culminates on a regular day.
    pub fn peak(&self) -> DateTime<Utc> {
        self.begins + self.duration() / 2
    }

    /// Whether `instant` falls inside the interval (both ends inclusive).
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.begins <= instant && instant <= self.ends
    }

    /// Daylight left from `instant` until the interval ends.
    ///
    /// The full duration before it begins, zero once it is over.
    pub fn remaining_at(&self, instant: DateTime<Utc>) -> Duration {
        if instant <= self.begins {
            self.duration()
        } else if instant >= self.ends {
            Duration::zero()
        } else {
            self.ends - instant
        }
    }
}
