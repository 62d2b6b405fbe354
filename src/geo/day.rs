//! One calendar day at one location, with full time zone context.
//!
//! A `SolarDay` is the unit of every calculation request. It keeps the
//! calendar date as a `NaiveDate` (valid by construction) together with the
//! zone used to interpret it, so local midnight and local noon can always be
//! resolved to absolute instants, including on days with a DST transition.

use chrono::{
    DateTime, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;

use super::Coordinate;

/// A calendar day anchored at local noon, at a coordinate, in a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    date: NaiveDate,
    coordinate: Coordinate,
    time_zone: Tz,
}

/// Days kept clear of chrono's calendar bounds, so that local midnight, the
/// neighbouring days and every crossing of the day stay representable.
const CALENDAR_MARGIN: Days = Days::new(2);

/// Move `date` inside the supported calendar.
fn clamp_to_calendar(date: NaiveDate) -> NaiveDate {
    let first = NaiveDate::MIN
        .checked_add_days(CALENDAR_MARGIN)
        .unwrap_or(NaiveDate::MIN);
    let last = NaiveDate::MAX
        .checked_sub_days(CALENDAR_MARGIN)
        .unwrap_or(NaiveDate::MAX);
    date.clamp(first, last)
}

/// `instant + delta`, pinned to chrono's range instead of overflowing.
pub(crate) fn saturating_add(instant: DateTime<Utc>, delta: Duration) -> DateTime<Utc> {
    instant.checked_add_signed(delta).unwrap_or(if delta < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

impl SolarDay {
    /// Dates within two days of chrono's calendar bounds are moved inward.
    pub fn new(date: NaiveDate, coordinate: Coordinate, time_zone: Tz) -> Self {
        Self {
            date: clamp_to_calendar(date),
            coordinate,
            time_zone,
        }
    }

    /// The day that contains `instant` on the wall clock of `time_zone`.
    ///
    /// The date is taken in the coordinate's zone, not the device zone: a
    /// viewer in Tokyo looking at London at 03:00 JST sees London's previous
    /// evening.
    pub fn containing(instant: DateTime<Utc>, coordinate: Coordinate, time_zone: Tz) -> Self {
        let date = instant.with_timezone(&time_zone).date_naive();
        Self::new(date, coordinate, time_zone)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The same location and zone on another date.
    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self::new(date, self.coordinate, self.time_zone)
    }

    /// Shift by whole calendar days.
    ///
    /// Saturates at the bounds of the supported calendar instead of failing.
    pub fn offset_days(&self, days: i64) -> Self {
        let date = Duration::try_days(days)
            .and_then(|delta| self.date.checked_add_signed(delta))
            .unwrap_or(self.date);
        self.with_date(date)
    }

    pub fn yesterday(&self) -> Self {
        self.offset_days(-1)
    }

    pub fn tomorrow(&self) -> Self {
        self.offset_days(1)
    }

    /// Local noon, the anchor of the day.
    pub fn noon(&self) -> DateTime<Tz> {
        resolve_local(
            &self.time_zone,
            self.date.and_time(NaiveTime::MIN) + Duration::hours(12),
        )
    }

    /// The UTC date whose solar noon falls on this local day.
    ///
    /// Differs from [`SolarDay::date`] where the zone offset is far from the
    /// longitude's mean solar time, e.g. +14:00 in the central Pacific.
    pub fn calculation_date(&self) -> NaiveDate {
        self.noon().with_timezone(&Utc).date_naive()
    }

    /// The first instant of the local day.
    pub fn start_of_day(&self) -> DateTime<Utc> {
        local_midnight(&self.time_zone, self.date)
    }

    /// One second before the next local midnight.
    pub fn end_of_day(&self) -> DateTime<Utc> {
        let next_start = self
            .date
            .succ_opt()
            .map(|next| local_midnight(&self.time_zone, next))
            .unwrap_or_else(|| saturating_add(self.start_of_day(), Duration::days(1)));
        saturating_add(next_start, -Duration::seconds(1))
    }

    /// Length of the local day: 24 hours except on DST transition days.
    pub fn length(&self) -> Duration {
        self.end_of_day() - self.start_of_day() + Duration::seconds(1)
    }
}

/// Absolute instant of local midnight on `date`.
fn local_midnight(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    resolve_local(tz, date.and_time(NaiveTime::MIN)).with_timezone(&Utc)
}

/// Resolve a wall-clock time in `tz` to an instant without failing.
///
/// Ambiguous times (DST fall-back) pick the earlier instant. Times that fall
/// into a DST gap move forward in 30 minute steps until they exist; after that
/// the wall-clock value is read as UTC.
pub(crate) fn resolve_local(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = naive;
    for _ in 0..4 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => match candidate.checked_add_signed(Duration::minutes(30)) {
                Some(next) => candidate = next,
                None => break,
            },
        }
    }
    tz.from_utc_datetime(&naive)
}
