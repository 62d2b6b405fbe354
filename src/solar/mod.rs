//! Sunrise, sunset and twilight crossings for a date and a coordinate.
//!
//! [`compute`] is the solar position calculator: for each [`Phase`] it solves
//! the hour-angle equation for the phase's altitude threshold and places the
//! rising and setting crossings around the local solar noon of the date.
//!
//! A phase the sun never reaches (or never leaves) on that day is reported as
//! an event with no instant. That is an expected outcome at high latitudes,
//! not an error, and this module never substitutes a finite time for it. See
//! [`crate::daylight::resolve`] for the fallback policy applied afterwards.

pub mod position;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::constants::{
    ASTRONOMICAL_TWILIGHT_ALTITUDE, CIVIL_TWILIGHT_ALTITUDE, NAUTICAL_TWILIGHT_ALTITUDE,
    SUNRISE_SUNSET_ALTITUDE,
};
use crate::geo::Coordinate;
use crate::geo::day::saturating_add;
use position::{SunParameters, hour_angle_cosine, julian_century, sun_parameters};

/// Minutes of time per degree of hour angle.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Solar phases that mark a crossing of an altitude threshold.
///
/// Variants are declared in the order they occur on an ordinary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AstronomicalDawn,
    NauticalDawn,
    CivilDawn,
    Sunrise,
    Sunset,
    CivilDusk,
    NauticalDusk,
    AstronomicalDusk,
}

impl Phase {
    /// Every phase, in chronological order.
    pub const ALL: [Phase; 8] = [
        Phase::AstronomicalDawn,
        Phase::NauticalDawn,
        Phase::CivilDawn,
        Phase::Sunrise,
        Phase::Sunset,
        Phase::CivilDusk,
        Phase::NauticalDusk,
        Phase::AstronomicalDusk,
    ];

    /// Altitude threshold of the sun's centre, in degrees.
    pub fn altitude(self) -> f64 {
        match self {
            Phase::Sunrise | Phase::Sunset => SUNRISE_SUNSET_ALTITUDE,
            Phase::CivilDawn | Phase::CivilDusk => CIVIL_TWILIGHT_ALTITUDE,
            Phase::NauticalDawn | Phase::NauticalDusk => NAUTICAL_TWILIGHT_ALTITUDE,
            Phase::AstronomicalDawn | Phase::AstronomicalDusk => ASTRONOMICAL_TWILIGHT_ALTITUDE,
        }
    }

    /// Whether the sun crosses the threshold on its way up.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Phase::AstronomicalDawn | Phase::NauticalDawn | Phase::CivilDawn | Phase::Sunrise
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::AstronomicalDawn => "Astronomical dawn",
            Phase::NauticalDawn => "Nautical dawn",
            Phase::CivilDawn => "Civil dawn",
            Phase::Sunrise => "Sunrise",
            Phase::Sunset => "Sunset",
            Phase::CivilDusk => "Civil dusk",
            Phase::NauticalDusk => "Nautical dusk",
            Phase::AstronomicalDusk => "Astronomical dusk",
        }
    }
}

/// One phase and the instant it happens, if it happens at all that day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarEvent {
    pub phase: Phase,
    pub instant: Option<DateTime<Utc>>,
}

/// All phase crossings for one date at one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarEvents {
    date: NaiveDate,
    solar_noon: DateTime<Utc>,
    transit_altitude: f64,
    events: [SolarEvent; 8],
}

impl SolarEvents {
    /// Assemble a result from per-phase instants.
    pub fn from_fn(
        date: NaiveDate,
        solar_noon: DateTime<Utc>,
        transit_altitude: f64,
        mut instant_of: impl FnMut(Phase) -> Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            date,
            solar_noon,
            transit_altitude,
            events: Phase::ALL.map(|phase| SolarEvent {
                phase,
                instant: instant_of(phase),
            }),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Instant of upper transit.
    pub fn solar_noon(&self) -> DateTime<Utc> {
        self.solar_noon
    }

    /// Altitude of the sun at solar noon, in degrees.
    pub fn transit_altitude(&self) -> f64 {
        self.transit_altitude
    }

    /// Instant of `phase`, or `None` if the sun does not cross its threshold.
    pub fn get(&self, phase: Phase) -> Option<DateTime<Utc>> {
        self.events
            .iter()
            .find(|event| event.phase == phase)
            .and_then(|event| event.instant)
    }

    /// Every phase in chronological order, including absent ones.
    pub fn iter(&self) -> impl Iterator<Item = &SolarEvent> {
        self.events.iter()
    }

    /// Only the phases that actually occur, as (phase, instant) pairs.
    pub fn occurring(&self) -> impl Iterator<Item = (Phase, DateTime<Utc>)> + '_ {
        self.events
            .iter()
            .filter_map(|event| event.instant.map(|instant| (event.phase, instant)))
    }
}

/// Compute every phase crossing on `date` at `coordinate`.
///
/// The computation is anchored on the solar noon of `date` at the
/// coordinate's longitude, so the returned instants belong to the local day
/// regardless of the zone the caller later displays them in. Deterministic:
/// the same inputs always give the same instants.
pub fn compute(date: NaiveDate, coordinate: &Coordinate) -> SolarEvents {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let noon_minutes = solar_noon_minutes(midnight, coordinate.longitude());
    let noon_params = parameters_at(midnight, noon_minutes);

    SolarEvents::from_fn(
        date,
        instant_at(midnight, noon_minutes),
        position::transit_altitude(coordinate.latitude(), noon_params.declination),
        |phase| crossing(midnight, noon_minutes, noon_params, coordinate, phase),
    )
}

fn instant_at(midnight: DateTime<Utc>, minutes: f64) -> DateTime<Utc> {
    saturating_add(
        midnight,
        Duration::milliseconds((minutes * 60_000.0).round() as i64),
    )
}

fn parameters_at(midnight: DateTime<Utc>, minutes: f64) -> SunParameters {
    sun_parameters(julian_century(instant_at(midnight, minutes)))
}

/// Minutes after 00:00 UTC of the solar transit at `longitude`.
fn solar_noon_minutes(midnight: DateTime<Utc>, longitude: f64) -> f64 {
    let mean_noon = 720.0 - MINUTES_PER_DEGREE * longitude;
    let mut noon = mean_noon;
    for _ in 0..2 {
        noon = mean_noon - parameters_at(midnight, noon).equation_of_time;
    }
    noon
}

/// Solve one phase crossing.
///
/// Existence is decided with the sun's position at solar noon; the time is
/// then refined once with the position at the estimated crossing.
fn crossing(
    midnight: DateTime<Utc>,
    noon_minutes: f64,
    noon_params: SunParameters,
    coordinate: &Coordinate,
    phase: Phase,
) -> Option<DateTime<Utc>> {
    let latitude = coordinate.latitude();
    let altitude = phase.altitude();

    let ratio = hour_angle_cosine(latitude, noon_params.declination, altitude);
    if !ratio.is_finite() || ratio.abs() > 1.0 {
        return None;
    }

    let direction = if phase.is_rising() { -1.0 } else { 1.0 };
    let estimate = noon_minutes + direction * MINUTES_PER_DEGREE * ratio.acos().to_degrees();

    let params = parameters_at(midnight, estimate);
    let refined_ratio = hour_angle_cosine(latitude, params.declination, altitude);
    if !refined_ratio.is_finite() {
        return Some(instant_at(midnight, estimate));
    }

    let noon = 720.0 - MINUTES_PER_DEGREE * coordinate.longitude() - params.equation_of_time;
    let hour_angle = refined_ratio.clamp(-1.0, 1.0).acos().to_degrees();
    Some(instant_at(
        midnight,
        noon + direction * MINUTES_PER_DEGREE * hour_angle,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Europe::London;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_equator_equinox_has_every_phase() {
        let coordinate = Coordinate::new(0.0, 0.0).unwrap();
        let events = compute(date(2023, 3, 20), &coordinate);
        for event in events.iter() {
            assert!(
                event.instant.is_some(),
                "{:?} missing at the equator on the equinox",
                event.phase
            );
        }
    }

    #[test]
    fn test_phases_are_chronological_on_an_ordinary_day() {
        let coordinate = Coordinate::new(40.7128, -74.0060).unwrap();
        let events = compute(date(2024, 3, 1), &coordinate);
        let instants: Vec<_> = events.occurring().map(|(_, instant)| instant).collect();
        assert_eq!(instants.len(), 8);
        assert!(instants.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(events.get(Phase::Sunrise).unwrap() < events.solar_noon());
        assert!(events.get(Phase::Sunset).unwrap() > events.solar_noon());
    }

    #[test]
    fn test_london_summer_solstice() {
        let coordinate = Coordinate::new(51.5074, -0.1278).unwrap();
        let events = compute(date(2023, 6, 21), &coordinate);

        let sunrise = events.get(Phase::Sunrise).unwrap().with_timezone(&London);
        let sunset = events.get(Phase::Sunset).unwrap().with_timezone(&London);

        let sunrise_minutes = sunrise.hour() * 60 + sunrise.minute();
        let sunset_minutes = sunset.hour() * 60 + sunset.minute();
        assert!(
            (sunrise_minutes as i32 - (4 * 60 + 43)).abs() <= 2,
            "sunrise at {sunrise}"
        );
        assert!(
            (sunset_minutes as i32 - (21 * 60 + 21)).abs() <= 2,
            "sunset at {sunset}"
        );
    }

    #[test]
    fn test_polar_day_has_no_sunrise_or_sunset() {
        let coordinate = Coordinate::new(78.0, 15.0).unwrap();
        let events = compute(date(2023, 6, 21), &coordinate);
        assert_eq!(events.get(Phase::Sunrise), None);
        assert_eq!(events.get(Phase::Sunset), None);
        assert_eq!(events.get(Phase::AstronomicalDusk), None);
        assert!(events.transit_altitude() > 0.0);
    }

    #[test]
    fn test_polar_night_keeps_deeper_twilight() {
        // At 78°N in midwinter the sun peaks around -11.4°: nautical and
        // astronomical twilight still happen, sunrise and civil dawn do not.
        let coordinate = Coordinate::new(78.0, 15.0).unwrap();
        let events = compute(date(2023, 12, 21), &coordinate);
        assert_eq!(events.get(Phase::Sunrise), None);
        assert_eq!(events.get(Phase::CivilDawn), None);
        assert!(events.get(Phase::NauticalDawn).is_some());
        assert!(events.get(Phase::AstronomicalDusk).is_some());
        assert!(events.transit_altitude() < CIVIL_TWILIGHT_ALTITUDE);
    }

    #[test]
    fn test_poles_do_not_panic() {
        for latitude in [90.0, -90.0] {
            let coordinate = Coordinate::new(latitude, 0.0).unwrap();
            let events = compute(date(2024, 9, 1), &coordinate);
            assert_eq!(events.iter().count(), 8);
        }
    }

    #[test]
    fn test_calendar_bounds_saturate() {
        for longitude in [-180.0, 0.0, 180.0] {
            let coordinate = Coordinate::new(0.0, longitude).unwrap();
            let first = compute(NaiveDate::MIN, &coordinate);
            assert!(first.occurring().all(|(_, instant)| instant <= first.solar_noon() + Duration::days(1)));
            let last = compute(NaiveDate::MAX, &coordinate);
            assert_eq!(last.date(), NaiveDate::MAX);
            assert!(last.transit_altitude().is_finite());
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let coordinate = Coordinate::new(-33.8688, 151.2093).unwrap();
        let first = compute(date(2024, 1, 15), &coordinate);
        let second = compute(date(2024, 1, 15), &coordinate);
        assert_eq!(first, second);
    }

    #[test]
    fn test_phase_metadata() {
        assert!(Phase::CivilDawn.is_rising());
        assert!(!Phase::NauticalDusk.is_rising());
        assert_eq!(Phase::AstronomicalDusk.altitude(), -18.0);
        assert_eq!(Phase::Sunset.label(), "Sunset");
    }
}
