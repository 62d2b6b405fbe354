//! Fallback resolution of missing sunrise and sunset.
//!
//! "Begins" walks Sunrise → CivilDawn → NauticalDawn → AstronomicalDawn and
//! falls back to the start of the local day. "Ends" is the true sunset when
//! there is one. Without it, the dusk chain (ending in the end of the local
//! day) provides a candidate that is only trusted if it describes a long
//! stretch of light; anything shorter than the degenerate-day threshold is
//! read as a polar-night sliver and collapses to a near-zero interval.

use chrono::{DateTime, Duration, Utc};

use super::DaylightInterval;
use crate::constants::{
    ASTRONOMICAL_TWILIGHT_ALTITUDE, DEGENERATE_DAY_THRESHOLD_SECS, DEGENERATE_DAYLIGHT_EPSILON_MS,
};
use crate::geo::SolarDay;
use crate::geo::day::saturating_add;
use crate::solar::{Phase, SolarEvents};

const BEGINS_CHAIN: [Phase; 4] = [
    Phase::Sunrise,
    Phase::CivilDawn,
    Phase::NauticalDawn,
    Phase::AstronomicalDawn,
];

const DUSK_CHAIN: [Phase; 3] = [Phase::CivilDusk, Phase::NauticalDusk, Phase::AstronomicalDusk];

fn first_available(events: &SolarEvents, chain: &[Phase]) -> Option<DateTime<Utc>> {
    chain.iter().find_map(|&phase| events.get(phase))
}

fn epsilon() -> Duration {
    Duration::milliseconds(DEGENERATE_DAYLIGHT_EPSILON_MS)
}

/// Resolve `events` for `day` into a daylight interval. Never fails.
pub fn resolve(events: &SolarEvents, day: &SolarDay) -> DaylightInterval {
    let start_of_day = day.start_of_day();
    let end_of_day = day.end_of_day();

    // No crossing at all and the sun stays below astronomical twilight
    if events.occurring().next().is_none()
        && events.transit_altitude() < ASTRONOMICAL_TWILIGHT_ALTITUDE
    {
        return DaylightInterval::new(start_of_day, saturating_add(start_of_day, epsilon()));
    }

    let begins = first_available(events, &BEGINS_CHAIN).unwrap_or(start_of_day);

    let ends = match events.get(Phase::Sunset) {
        Some(sunset) => sunset,
        None => {
            let candidate = first_available(events, &DUSK_CHAIN).unwrap_or(end_of_day);
            if candidate - begins > Duration::seconds(DEGENERATE_DAY_THRESHOLD_SECS) {
                end_of_day
            } else {
                saturating_add(begins, epsilon())
            }
        }
    };

    DaylightInterval::new(begins, ends)
}
