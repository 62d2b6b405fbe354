//! Geographic inputs for the daylight calculations.
//!
//! ## Module Structure
//!
//! - [`day`]: [`SolarDay`], one calendar day at one location in one zone
//! - [`display`]: formatting helpers for instants, offsets and durations
//! - [`timezone`]: zone lookup from coordinates and zone-name parsing
//!
//! A [`Coordinate`] can only be built through [`Coordinate::new`], which
//! rejects out-of-range values. Everything downstream of it (the solar
//! calculator, the fallback resolver, the comparator) can therefore assume a
//! valid location and never has to report an error.

pub mod day;
pub mod display;
pub mod timezone;

use serde::Serialize;
use std::fmt;

use crate::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::error::{DaylightError, Result};

pub use day::SolarDay;
pub use timezone::{determine_timezone_from_coordinates, parse_time_zone};


/// A validated geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// The documented fallback location (London), used when no real location
    /// is available.
    pub const DEFAULT: Coordinate = Coordinate {
        latitude: DEFAULT_LATITUDE,
        longitude: DEFAULT_LONGITUDE,
    };

    /// Validate and build a coordinate.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180]. NaN is
    /// rejected as well, since it is contained in neither range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DaylightError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, positive north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{ns}, {:.4}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}
