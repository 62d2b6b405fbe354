//! Day-over-day daylight comparison.
//!
//! [`compare`] takes two resolved intervals and reports how much longer (or
//! shorter) the first is. Durations are differences of absolute instants, so
//! a DST change between the two days never shows up as an hour of "extra"
//! daylight. [`describe`] turns the result into the sentence shown to users:
//!
//! ```text
//! 2 minutes more daylight today than yesterday.
//! 1 hour, 4 minutes less daylight on Dec 1, 2024 than today.
//! ```

pub mod humanize;

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

use crate::daylight::DaylightInterval;
pub use humanize::humanize_duration;

/// The signed difference between two days' daylight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaylightComparison {
    current: DaylightInterval,
    reference: DaylightInterval,
    delta_seconds: f64,
}

impl DaylightComparison {
    pub fn current(&self) -> &DaylightInterval {
        &self.current
    }

    pub fn reference(&self) -> &DaylightInterval {
        &self.reference
    }

    /// `duration(current) - duration(reference)` in seconds.
    pub fn delta_seconds(&self) -> f64 {
        self.delta_seconds
    }

    /// True when the current day has at least as much daylight.
    pub fn is_gain(&self) -> bool {
        self.delta_seconds >= 0.0
    }
}

/// Compare `current` against `reference`.
pub fn compare(current: &DaylightInterval, reference: &DaylightInterval) -> DaylightComparison {
    let delta: Duration = current.duration() - reference.duration();
    DaylightComparison {
        current: *current,
        reference: *reference,
        delta_seconds: delta.num_milliseconds() as f64 / 1000.0,
    }
}

/// How a day is named in a comparison sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayLabel {
    Today,
    Yesterday,
    Tomorrow,
    Date(NaiveDate),
}

impl DayLabel {
    /// Name `date` relative to `today` where possible.
    pub fn relative_to(date: NaiveDate, today: NaiveDate) -> Self {
        match (date - today).num_days() {
            0 => DayLabel::Today,
            -1 => DayLabel::Yesterday,
            1 => DayLabel::Tomorrow,
            _ => DayLabel::Date(date),
        }
    }

    pub fn is_relative(&self) -> bool {
        !matches!(self, DayLabel::Date(_))
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Today => f.write_str("today"),
            DayLabel::Yesterday => f.write_str("yesterday"),
            DayLabel::Tomorrow => f.write_str("tomorrow"),
            DayLabel::Date(date) => write!(f, "{}", date.format("%b %-d, %Y")),
        }
    }
}

/// Render the comparison sentence.
///
/// `"<amount> <more|less> daylight <day> than <reference>."` where `<day>` is
/// the bare label for relative days and `on <date>` otherwise.
pub fn describe(
    comparison: &DaylightComparison,
    current_label: &DayLabel,
    reference_label: &DayLabel,
) -> String {
    let amount = humanize_duration(comparison.delta_seconds);
    let direction = if comparison.is_gain() { "more" } else { "less" };
    let clause = if current_label.is_relative() {
        current_label.to_string()
    } else {
        format!("on {current_label}")
    };
    format!("{amount} {direction} daylight {clause} than {reference_label}.")
}

/// The date a day is compared against by default: yesterday when looking at
/// today, otherwise today.
pub fn reference_day_for(date: NaiveDate, today: NaiveDate) -> NaiveDate {
    if date == today {
        today.pred_opt().unwrap_or(today)
    } else {
        today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn interval(begins_h: u32, ends_h: u32, ends_m: u32) -> DaylightInterval {
        let begins: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 4, 2, begins_h, 0, 0).unwrap();
        let ends = Utc.with_ymd_and_hms(2024, 4, 2, ends_h, ends_m, 0).unwrap();
        DaylightInterval::new(begins, ends)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let a = interval(6, 19, 2);
        let b = interval(6, 19, 0);
        assert_eq!(compare(&a, &b).delta_seconds(), 120.0);
        assert_eq!(compare(&b, &a).delta_seconds(), -120.0);
    }

    #[test]
    fn test_compare_identical_is_zero() {
        let a = interval(7, 17, 0);
        let comparison = compare(&a, &a);
        assert_eq!(comparison.delta_seconds(), 0.0);
        assert!(comparison.is_gain());
    }

    #[test]
    fn test_describe_relative_day() {
        let comparison = compare(&interval(6, 19, 2), &interval(6, 19, 0));
        assert_eq!(
            describe(&comparison, &DayLabel::Today, &DayLabel::Yesterday),
            "2 minutes more daylight today than yesterday."
        );
    }

    #[test]
    fn test_describe_absolute_day() {
        let comparison = compare(&interval(8, 16, 0), &interval(7, 18, 4));
        let sentence = describe(
            &comparison,
            &DayLabel::Date(date(2024, 12, 1)),
            &DayLabel::Today,
        );
        assert_eq!(
            sentence,
            "3 hours, 4 minutes less daylight on Dec 1, 2024 than today."
        );
    }

    #[test]
    fn test_describe_swapped_only_flips_direction() {
        let a = interval(6, 19, 5);
        let b = interval(6, 19, 0);
        let forward = describe(&compare(&a, &b), &DayLabel::Today, &DayLabel::Today);
        let backward = describe(&compare(&b, &a), &DayLabel::Today, &DayLabel::Today);
        assert_eq!(forward.replace("more", "less"), backward);
    }

    #[test]
    fn test_day_label_relative_to() {
        let today = date(2024, 3, 1);
        assert_eq!(DayLabel::relative_to(today, today), DayLabel::Today);
        assert_eq!(DayLabel::relative_to(date(2024, 2, 29), today), DayLabel::Yesterday);
        assert_eq!(DayLabel::relative_to(date(2024, 3, 2), today), DayLabel::Tomorrow);
        assert_eq!(
            DayLabel::relative_to(date(2024, 6, 21), today).to_string(),
            "Jun 21, 2024"
        );
    }

    #[test]
    fn test_reference_day_for() {
        let today = date(2024, 3, 1);
        assert_eq!(reference_day_for(today, today), date(2024, 2, 29));
        assert_eq!(reference_day_for(date(2024, 6, 21), today), today);
    }
}
