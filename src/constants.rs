//! Application-wide constants.
//!
//! Altitude thresholds, fallback policy values, the default location and the
//! process exit codes all live here so that the calculation modules and the
//! command layer agree on them.

// # Solar altitude thresholds (degrees)

/// Sunrise and sunset: the geometric horizon adjusted for standard refraction
/// (34') and the solar semi-diameter (16').
pub const SUNRISE_SUNSET_ALTITUDE: f64 = -0.833;

/// Civil twilight boundary.
pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;

/// Nautical twilight boundary.
pub const NAUTICAL_TWILIGHT_ALTITUDE: f64 = -12.0;

/// Astronomical twilight boundary.
pub const ASTRONOMICAL_TWILIGHT_ALTITUDE: f64 = -18.0;

// # Daylight fallback policy

/// Span above which a fallback "ends" value is read as near-continuous
/// daylight rather than a narrow twilight sliver.
///
/// When the true sunset is missing and the fallback chain produces an end that
/// lies more than this many seconds after the resolved beginning, the interval
/// is clamped to the end of the local day. Otherwise it collapses to
/// `begins + DEGENERATE_DAYLIGHT_EPSILON_MS`. The seven-hour value is kept as
/// an established policy; it is not derived from any physical quantity.
pub const DEGENERATE_DAY_THRESHOLD_SECS: i64 = 7 * 60 * 60;

/// Width of the sliver interval reported for polar-night style days, so the
/// interval never collapses to exactly zero.
pub const DEGENERATE_DAYLIGHT_EPSILON_MS: i64 = 100;

// # Default location (used when no location is configured)

/// Latitude of the documented default location (London).
pub const DEFAULT_LATITUDE: f64 = 51.5074;

/// Longitude of the documented default location (London).
pub const DEFAULT_LONGITUDE: f64 = -0.1278;

/// Zone of the documented default location.
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

// # Configuration

pub const CONFIG_DIR_NAME: &str = "daylight";
pub const CONFIG_FILE_NAME: &str = "daylight.toml";
pub const GEO_FILE_NAME: &str = "geo.toml";

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
