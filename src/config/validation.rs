//! Configuration validation functionality.

use anyhow::{Context, Result};

use super::Config;
use crate::geo::parse_time_zone;

/// Reject out-of-range or half-specified locations and unknown zones.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    match (config.latitude, config.longitude) {
        (Some(_), None) => anyhow::bail!("latitude is set but longitude is missing"),
        (None, Some(_)) => anyhow::bail!("longitude is set but latitude is missing"),
        _ => {}
    }

    if let Some(ref name) = config.timezone {
        parse_time_zone(name).with_context(|| format!("Invalid timezone '{name}'"))?;
    }

    Ok(())
}
