//! Time zone adjustment for display.
//!
//! Instants are always absolute. What changes between zones is only how an
//! instant is read off a wall clock. [`TimeZoneAdjuster`] knows the device
//! zone and shifts instants so that code which can only render in the device
//! zone (a chart axis, a formatter bound to the local clock) shows the
//! location's wall-clock time instead.

use chrono::{DateTime, Duration, Local, Offset, TimeZone, Timelike, Utc};

/// UTC offset of `zone` at `instant`, in seconds east of UTC.
pub fn offset_seconds<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> i32 {
    zone.offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
}

/// Shifts instants between the device zone and a target zone.
#[derive(Debug, Clone)]
pub struct TimeZoneAdjuster<D: TimeZone = Local> {
    device: D,
}

impl TimeZoneAdjuster<Local> {
    /// Adjuster for the zone this process runs in.
    pub fn for_local_device() -> Self {
        Self::new(Local)
    }
}

impl<D: TimeZone> TimeZoneAdjuster<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Target offset minus device offset, both looked up at `instant`.
    ///
    /// Positive when the target is ahead of the device.
    pub fn offset_shift<Z: TimeZone>(&self, instant: DateTime<Utc>, target: &Z) -> Duration {
        let difference = offset_seconds(instant, target) - offset_seconds(instant, &self.device);
        Duration::seconds(i64::from(difference))
    }

    /// Shift `instant` so that reading it on the device clock shows the wall
    /// time of `target`.
    pub fn adjust<Z: TimeZone>(&self, instant: DateTime<Utc>, target: &Z) -> ZoneAdjusted {
        let shift = self.offset_shift(instant, target);
        ZoneAdjusted {
            adjusted: instant + shift,
            shift,
        }
    }
}

/// An instant shifted for display, remembering the shift it was given.
///
/// Keeping the shift makes [`ZoneAdjusted::restore`] exact even when the
/// adjusted instant lands on the other side of a DST transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneAdjusted {
    adjusted: DateTime<Utc>,
    shift: Duration,
}

impl ZoneAdjusted {
    pub fn adjusted(&self) -> DateTime<Utc> {
        self.adjusted
    }

    pub fn shift(&self) -> Duration {
        self.shift
    }

    /// The original instant.
    pub fn restore(&self) -> DateTime<Utc> {
        self.adjusted - self.shift
    }
}

/// Hour, minute and second on a wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallClock {
    /// Position on a 24-hour axis, in seconds.
    pub fn seconds_from_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

/// Wall-clock reading of `instant` in `zone`, DST-correct for that instant.
pub fn wall_clock_components<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> WallClock {
    let local = instant.with_timezone(zone);
    WallClock {
        hour: local.hour(),
        minute: local.minute(),
        second: local.second(),
    }
}

/// Render an offset in seconds as `+HH:MM`.
pub fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::{Kolkata, Tokyo};
    use chrono_tz::Europe::London;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_offset_shift_follows_dst() {
        let adjuster = TimeZoneAdjuster::new(London);
        let winter = utc(2024, 1, 15, 12, 0);
        let summer = utc(2024, 7, 15, 12, 0);

        assert_eq!(adjuster.offset_shift(winter, &Tokyo), Duration::hours(9));
        assert_eq!(adjuster.offset_shift(summer, &Tokyo), Duration::hours(8));
        assert_eq!(adjuster.offset_shift(summer, &New_York), Duration::hours(-5));
    }

    #[test]
    fn test_offset_shift_is_antisymmetric() {
        let instant = utc(2024, 3, 20, 6, 0);
        let forward = TimeZoneAdjuster::new(Kolkata).offset_shift(instant, &New_York);
        let backward = TimeZoneAdjuster::new(New_York).offset_shift(instant, &Kolkata);
        assert_eq!(forward, -backward);
    }

    #[test]
    fn test_adjusted_instant_reads_as_target_wall_clock() {
        let adjuster = TimeZoneAdjuster::new(New_York);
        let instant = utc(2024, 6, 1, 4, 0);
        let adjusted = adjuster.adjust(instant, &Tokyo);

        let on_device = wall_clock_components(adjusted.adjusted(), &New_York);
        let in_target = wall_clock_components(instant, &Tokyo);
        assert_eq!(on_device, in_target);
    }

    #[test]
    fn test_restore_is_exact_across_fall_back() {
        let adjuster = TimeZoneAdjuster::new(London);
        // 00:30 UTC on the night British Summer Time ends
        let instant = utc(2024, 10, 27, 0, 30);
        let adjusted = adjuster.adjust(instant, &Utc);
        assert_eq!(adjusted.restore(), instant);
    }

    #[test]
    fn test_wall_clock_components() {
        let clock = wall_clock_components(utc(2024, 7, 1, 20, 45), &London);
        assert_eq!(
            clock,
            WallClock {
                hour: 21,
                minute: 45,
                second: 0
            }
        );
        assert_eq!(clock.seconds_from_midnight(), 21 * 3600 + 45 * 60);
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0), "+00:00");
        assert_eq!(format_offset(19_800), "+05:30");
        assert_eq!(format_offset(-14_400), "-04:00");
        assert_eq!(format_offset(-9_000), "-02:30");
    }
}
