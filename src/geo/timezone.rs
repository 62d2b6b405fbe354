//! Time zone lookup and parsing.

use chrono_tz::Tz;
use std::sync::OnceLock;
use tzf_rs::DefaultFinder;

use super::Coordinate;
use crate::error::{DaylightError, Result};

/// Determine the zone for a coordinate using timezone boundary data.
///
/// Open ocean and unclaimed territory resolve to UTC.
pub fn determine_timezone_from_coordinates(coordinate: &Coordinate) -> Tz {
    // The finder loads its boundary data once per process
    static FINDER: OnceLock<DefaultFinder> = OnceLock::new();
    let finder = FINDER.get_or_init(DefaultFinder::new);

    // tzf-rs takes (longitude, latitude)
    let tz_name = finder.get_tz_name(coordinate.longitude(), coordinate.latitude());

    tz_name.parse::<Tz>().unwrap_or(Tz::UTC)
}

/// Parse an IANA zone identifier such as `Europe/London`.
pub fn parse_time_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DaylightError::UnknownTimeZone(name.to_string()))
}
