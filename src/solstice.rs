//! June and December solstices.
//!
//! A solstice is the instant the sun's apparent ecliptic longitude reaches
//! 90° (June) or 270° (December). Starting from the 21st of the month, a few
//! Newton steps on the mean solar motion pin it down to well under a minute,
//! which is more than enough for "days until the solstice" style output.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::Serialize;

use crate::solar::position::{apparent_longitude, julian_century};

/// Mean motion of the sun along the ecliptic, degrees per day.
const MEAN_DAILY_MOTION: f64 = 0.985_647;

const REFINEMENT_STEPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolsticeKind {
    June,
    December,
}

impl SolsticeKind {
    fn target_longitude(self) -> f64 {
        match self {
            SolsticeKind::June => 90.0,
            SolsticeKind::December => 270.0,
        }
    }

    fn month(self) -> u32 {
        match self {
            SolsticeKind::June => 6,
            SolsticeKind::December => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SolsticeKind::June => "June solstice",
            SolsticeKind::December => "December solstice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solstice {
    pub kind: SolsticeKind,
    pub instant: DateTime<Utc>,
}

/// The solstice of `kind` in `year`, or `None` outside chrono's range.
pub fn in_year(year: i32, kind: SolsticeKind) -> Option<Solstice> {
    let mut instant = Utc
        .with_ymd_and_hms(year, kind.month(), 21, 12, 0, 0)
        .single()?;

    for _ in 0..REFINEMENT_STEPS {
        let longitude = apparent_longitude(julian_century(instant));
        let error = (kind.target_longitude() - longitude + 180.0).rem_euclid(360.0) - 180.0;
        let step_ms = (error / MEAN_DAILY_MOTION * 86_400_000.0).round() as i64;
        instant = instant.checked_add_signed(Duration::milliseconds(step_ms))?;
    }

    Some(Solstice { kind, instant })
}

fn around(instant: DateTime<Utc>) -> impl Iterator<Item = Solstice> {
    let year = instant.year();
    (year - 1..=year + 1).flat_map(|y| {
        [SolsticeKind::June, SolsticeKind::December]
            .into_iter()
            .filter_map(move |kind| in_year(y, kind))
    })
}

/// The most recent solstice strictly before `instant`.
pub fn previous(instant: DateTime<Utc>) -> Option<Solstice> {
    around(instant)
        .filter(|solstice| solstice.instant < instant)
        .max_by_key(|solstice| solstice.instant)
}

/// The first solstice strictly after `instant`.
pub fn next(instant: DateTime<Utc>) -> Option<Solstice> {
    around(instant)
        .filter(|solstice| solstice.instant > instant)
        .min_by_key(|solstice| solstice.instant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: DateTime<Utc>, expected: DateTime<Utc>) {
        let error = (actual - expected).num_minutes().abs();
        assert!(error <= 30, "{actual} is {error} minutes from {expected}");
    }

    #[test]
    fn test_solstices_of_2023() {
        let june = in_year(2023, SolsticeKind::June).unwrap();
        assert_close(june.instant, Utc.with_ymd_and_hms(2023, 6, 21, 14, 57, 0).unwrap());

        let december = in_year(2023, SolsticeKind::December).unwrap();
        assert_close(
            december.instant,
            Utc.with_ymd_and_hms(2023, 12, 22, 3, 27, 0).unwrap(),
        );
    }

    #[test]
    fn test_previous_and_next_from_spring() {
        let instant = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();

        let previous = previous(instant).unwrap();
        assert_eq!(previous.kind, SolsticeKind::December);
        assert_eq!(previous.instant.year(), 2023);

        let next = next(instant).unwrap();
        assert_eq!(next.kind, SolsticeKind::June);
        assert_eq!(next.instant.year(), 2024);
        assert_close(next.instant, Utc.with_ymd_and_hms(2024, 6, 20, 20, 51, 0).unwrap());
    }

    #[test]
    fn test_late_december_rolls_into_next_year() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap();
        assert_eq!(previous(instant).unwrap().kind, SolsticeKind::December);
        let next = next(instant).unwrap();
        assert_eq!(next.kind, SolsticeKind::June);
        assert_eq!(next.instant.year(), 2025);
    }
}
