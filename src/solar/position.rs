//! Low-precision solar coordinates.
//!
//! Declination, equation of time and apparent ecliptic longitude of the sun
//! from the NOAA solar calculator series (Meeus, "Astronomical Algorithms",
//! chapter 25, low accuracy). Good to about a minute of time for sunrise and
//! sunset between 1900 and 2100, which is all this crate promises.

use chrono::{DateTime, Utc};

const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;
const J2000_JULIAN_DAY: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Solar quantities needed to place an altitude crossing in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunParameters {
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time in minutes (apparent minus mean solar time).
    pub equation_of_time: f64,
}

/// Julian day number of an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JULIAN_DAY
}

/// Julian centuries since J2000.0.
pub fn julian_century(instant: DateTime<Utc>) -> f64 {
    (julian_day(instant) - J2000_JULIAN_DAY) / DAYS_PER_JULIAN_CENTURY
}

fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

fn mean_longitude(t: f64) -> f64 {
    normalize_degrees(280.46646 + t * (36000.76983 + t * 0.0003032))
}

fn mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - t * 0.0001537)
}

fn orbit_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + t * 0.0000001267)
}

fn equation_of_center(t: f64) -> f64 {
    let m = mean_anomaly(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + t * 0.000014))
        + (2.0 * m).sin() * (0.019993 - t * 0.000101)
        + (3.0 * m).sin() * 0.000289
}

/// Longitude of the ascending node of the moon's orbit, for nutation.
fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent ecliptic longitude of the sun in degrees, normalized to [0, 360).
pub fn apparent_longitude(t: f64) -> f64 {
    let true_longitude = mean_longitude(t) + equation_of_center(t);
    normalize_degrees(true_longitude - 0.00569 - 0.00478 * omega(t).to_radians().sin())
}

fn obliquity(t: f64) -> f64 {
    let mean = 23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0;
    mean + 0.00256 * omega(t).to_radians().cos()
}

/// Declination and equation of time at `t` Julian centuries since J2000.0.
pub fn sun_parameters(t: f64) -> SunParameters {
    let epsilon = obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    let declination = (epsilon.sin() * lambda.sin()).asin().to_degrees();

    let l0 = mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = orbit_eccentricity(t);
    let y = (epsilon / 2.0).tan().powi(2);

    let equation = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    SunParameters {
        declination,
        equation_of_time: 4.0 * equation.to_degrees(),
    }
}

/// Cosine of the hour angle at which the sun reaches `altitude`.
///
/// `cos(H) = (sin(alt) - sin(lat)·sin(decl)) / (cos(lat)·cos(decl))`.
/// Values outside [-1, 1] mean the sun never crosses `altitude` that day:
/// above 1 it stays below the threshold, below -1 it stays above.
pub fn hour_angle_cosine(latitude: f64, declination: f64, altitude: f64) -> f64 {
    let lat = latitude.to_radians();
    let decl = declination.to_radians();
    (altitude.to_radians().sin() - lat.sin() * decl.sin()) / (lat.cos() * decl.cos())
}

/// Altitude of the sun at upper transit (solar noon), in degrees.
pub fn transit_altitude(latitude: f64, declination: f64) -> f64 {
    90.0 - (latitude - declination).abs()
}
