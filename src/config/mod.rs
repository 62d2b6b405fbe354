//! Configuration for the daylight command-line front end.
//!
//! The calculation API takes everything it needs as arguments. This module
//! only supplies defaults for the command layer: where the user is, which
//! zone to read times in, and how to print them.
//!
//! ## Configuration Sources
//!
//! 1. `--config <dir>`: `<dir>/daylight.toml`
//! 2. **XDG_CONFIG_HOME**/daylight/daylight.toml (located with `dirs`)
//!
//! A missing file is not an error; every field is optional. A `geo.toml` next
//! to the main file overrides the coordinates, so the main file can be shared
//! or version controlled without the location in it.
//!
//! ```toml
//! latitude = 51.5074         # Geographic latitude (-90 to 90)
//! longitude = -0.1278        # Geographic longitude (-180 to 180)
//! timezone = "Europe/London" # IANA zone; looked up from the coordinates if absent
//! time_format = "24h"        # "24h" or "12h"
//! ```
//!
//! ## Validation
//!
//! Coordinates are range checked, must be given together, and the zone must
//! be a known IANA identifier. See [`validation::validate_config`].

pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::geo::{Coordinate, parse_time_zone};

pub use loading::{get_config_path, load, load_from_path, private_path};

#[cfg(test)]
mod tests;

/// Coordinates stored separately in `geo.toml`.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GeoConfig {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
}

/// Clock style for printed times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

impl TimeFormat {
    /// `chrono` format pattern for hours and minutes.
    pub fn pattern(self) -> &'static str {
        match self {
            TimeFormat::TwentyFourHour => "%H:%M",
            TimeFormat::TwelveHour => "%-I:%M %p",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::TwentyFourHour => "24h",
            TimeFormat::TwelveHour => "12h",
        }
    }
}

/// Settings read from `daylight.toml` (and `geo.toml`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// IANA zone used to read event times
    pub timezone: Option<String>,
    pub time_format: Option<TimeFormat>,
}

impl Config {
    /// Load from the default location or from `custom_dir`.
    pub fn load(custom_dir: Option<&Path>) -> Result<Self> {
        loading::load(custom_dir)
    }

    /// The configured location, if both coordinates are present.
    pub fn coordinate(&self) -> Result<Option<Coordinate>> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude)
                .map(Some)
                .context("Invalid coordinates in configuration"),
            _ => Ok(None),
        }
    }

    /// The configured zone, if any.
    pub fn time_zone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| parse_time_zone(name).context("Invalid timezone in configuration"))
            .transpose()
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format.unwrap_or_default()
    }

    /// Print the effective configuration (shown with `--debug`).
    pub fn log_config(&self, source: &Path) {
        if source.exists() {
            log_block_start!("Loaded configuration from {}", private_path(source));
        } else {
            log_block_start!("No configuration file, using defaults");
            log_indented!("Looked for {}", private_path(source));
        }

        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => log_indented!("Location: {lat:.4}°, {lon:.4}°"),
            _ => log_indented!("Location: not configured"),
        }
        log_indented!(
            "Timezone: {}",
            self.timezone.as_deref().unwrap_or("from coordinates")
        );
        log_indented!("Time format: {}", self.time_format().as_str());
    }
}
