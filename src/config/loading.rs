//! Configuration loading functionality.
//!
//! Handles locating `daylight.toml`, reading it, and applying `geo.toml`
//! overrides before validation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::validation::validate_config;
use super::{Config, GeoConfig};
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, GEO_FILE_NAME};

/// Path of the main configuration file.
///
/// `custom_dir` comes from `--config`; without it the file lives in the
/// platform configuration directory (`$XDG_CONFIG_HOME` on Linux).
pub fn get_config_path(custom_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = custom_dir {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration using automatic path detection.
///
/// A missing file yields the defaults (plus any `geo.toml` next to where the
/// file would be).
pub fn load(custom_dir: Option<&Path>) -> Result<Config> {
    let config_path = get_config_path(custom_dir)?;

    if config_path.exists() {
        return load_from_path(&config_path);
    }

    let mut config = Config::default();
    load_geo_override_from_path(&mut config, &config_path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a specific path. The file must exist.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", private_path(path)))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", private_path(path)))?;

    // Apply before validation so geo.toml values are validated too
    load_geo_override_from_path(&mut config, path)?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", private_path(path)))?;

    Ok(config)
}

/// Apply `geo.toml` from the directory of `config_path`, if present.
///
/// A malformed or unreadable `geo.toml` is reported and skipped.
pub(crate) fn load_geo_override_from_path(config: &mut Config, config_path: &Path) -> Result<()> {
    let Some(parent) = config_path.parent() else {
        return Ok(());
    };
    let geo_path = parent.join(GEO_FILE_NAME);

    if !geo_path.exists() {
        return Ok(());
    }

    match fs::read_to_string(&geo_path) {
        Ok(content) => match toml::from_str::<GeoConfig>(&content) {
            Ok(geo_config) => {
                if let Some(lat) = geo_config.latitude {
                    config.latitude = Some(lat);
                }
                if let Some(lon) = geo_config.longitude {
                    config.longitude = Some(lon);
                }
            }
            Err(e) => {
                log_pipe!();
                log_warning!("Failed to parse geo.toml: {e}. Using coordinates from main config.");
            }
        },
        Err(e) => {
            log_pipe!();
            log_warning!("Failed to read geo.toml: {e}. Using coordinates from main config.");
        }
    }

    Ok(())
}

/// Render a path with the home directory shortened to `~`.
pub fn private_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(relative) = path.strip_prefix(&home)
    {
        return format!("~/{}", relative.display());
    }
    path.display().to_string()
}
