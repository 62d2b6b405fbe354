//! Time source abstraction for real, fixed and shifted clocks.
//!
//! The calculation API never reads the clock itself. Whoever needs "now" takes
//! a [`TimeSource`] and asks it, which lets the command layer answer queries
//! for another day (the "time machine" offset) and lets tests pin the instant.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Trait for abstracting the current instant.
pub trait TimeSource: Send + Sync {
    /// Get the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Check if this source reports anything other than the real clock.
    fn is_simulated(&self) -> bool {
        false
    }
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Shifts another source by a whole number of 24-hour days.
///
/// A zero offset behaves exactly like the wrapped source.
#[derive(Debug, Clone)]
pub struct OffsetTimeSource<S> {
    inner: S,
    day_offset: i64,
}

impl<S: TimeSource> OffsetTimeSource<S> {
    pub fn new(inner: S, day_offset: i64) -> Self {
        Self { inner, day_offset }
    }
}

impl<S: TimeSource> TimeSource for OffsetTimeSource<S> {
    fn now(&self) -> DateTime<Utc> {
        let base = self.inner.now();
        // Offsets that leave chrono's range keep the unshifted instant
        Duration::try_days(self.day_offset)
            .and_then(|shift| base.checked_add_signed(shift))
            .unwrap_or(base)
    }

    fn is_simulated(&self) -> bool {
        self.day_offset != 0 || self.inner.is_simulated()
    }
}

/// Parse a date string in the format "YYYY-MM-DD".
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date format: {e}. Use YYYY-MM-DD"))
}

/// Parse a datetime string "YYYY-MM-DD HH:MM:SS" as wall-clock time in `tz`.
pub fn parse_datetime_in_tz(s: &str, tz: Tz) -> Result<DateTime<Tz>, String> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S")
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))
        .and_then(|naive| {
            tz.from_local_datetime(&naive)
                .single()
                .ok_or_else(|| format!("Ambiguous or invalid time in timezone {tz}"))
        })
}
