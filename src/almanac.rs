//! Everything known about one day at one place.
//!
//! An [`Almanac`] is the composition the presentation layer works with: the
//! raw solar events, the resolved daylight interval, and navigation to the
//! neighbouring days. It is cheap to rebuild, so callers simply construct a
//! new one whenever the date or the location changes.

use chrono::{DateTime, Duration, Utc};

use crate::comparison::{DaylightComparison, compare};
use crate::daylight::{self, DaylightInterval};
use crate::geo::SolarDay;
use crate::solar::{self, Phase, SolarEvents};

#[derive(Debug, Clone, PartialEq)]
pub struct Almanac {
    day: SolarDay,
    events: SolarEvents,
    daylight: DaylightInterval,
}

impl Almanac {
    /// Compute events and resolve daylight for `day`.
    pub fn for_day(day: SolarDay) -> Self {
        let events = solar::compute(day.calculation_date(), &day.coordinate());
        let daylight = daylight::resolve(&events, &day);
        Self {
            day,
            events,
            daylight,
        }
    }

    pub fn day(&self) -> &SolarDay {
        &self.day
    }

    pub fn events(&self) -> &SolarEvents {
        &self.events
    }

    pub fn daylight(&self) -> &DaylightInterval {
        &self.daylight
    }

    pub fn yesterday(&self) -> Self {
        Self::for_day(self.day.yesterday())
    }

    pub fn tomorrow(&self) -> Self {
        Self::for_day(self.day.tomorrow())
    }

    /// Compare this day's daylight against `reference`.
    pub fn compare_with(&self, reference: &Almanac) -> DaylightComparison {
        compare(&self.daylight, &reference.daylight)
    }

    fn horizon_crossings(&self) -> impl Iterator<Item = (Phase, DateTime<Utc>)> + '_ {
        self.events
            .occurring()
            .filter(|(phase, _)| matches!(phase, Phase::Sunrise | Phase::Sunset))
    }

    /// The first sunrise or sunset after `after`, looking into tomorrow if
    /// nothing is left today.
    pub fn next_solar_event(&self, after: DateTime<Utc>) -> Option<(Phase, DateTime<Utc>)> {
        self.horizon_crossings()
            .find(|(_, instant)| *instant > after)
            .or_else(|| {
                self.tomorrow()
                    .horizon_crossings()
                    .find(|(_, instant)| *instant > after)
            })
    }

    /// The last sunrise or sunset before `before`, looking into yesterday if
    /// nothing happened yet today.
    pub fn previous_solar_event(&self, before: DateTime<Utc>) -> Option<(Phase, DateTime<Utc>)> {
        self.horizon_crossings()
            .filter(|(_, instant)| *instant < before)
            .last()
            .or_else(|| {
                self.yesterday()
                    .horizon_crossings()
                    .filter(|(_, instant)| *instant < before)
                    .last()
            })
    }

    /// Share of the local day that is daylight, in [0, 1].
    pub fn daylight_proportion(&self) -> f64 {
        let day_seconds = self.day.length().num_milliseconds() as f64 / 1000.0;
        if day_seconds <= 0.0 {
            return 0.0;
        }
        (self.daylight.duration_seconds() / day_seconds).clamp(0.0, 1.0)
    }

    /// Solar noon relative to the midpoint of the local day.
    ///
    /// Positive when the sun culminates after the clock's midday, which is
    /// the usual case under daylight saving time.
    pub fn culmination_offset(&self) -> Duration {
        let midpoint = self.day.start_of_day() + self.day.length() / 2;
        self.events.solar_noon() - midpoint
    }
}
