use super::validation::validate_config;
use super::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn create_test_config(
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<&str>,
) -> Config {
    Config {
        latitude,
        longitude,
        timezone: timezone.map(|s| s.to_string()),
        time_format: None,
    }
}

#[test]
fn test_config_validation_basic() {
    let config = create_test_config(Some(40.7128), Some(-74.0060), Some("America/New_York"));
    assert!(validate_config(&config).is_ok());
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn test_config_validation_coordinate_ranges() {
    assert!(validate_config(&create_test_config(Some(90.0), Some(180.0), None)).is_ok());
    assert!(validate_config(&create_test_config(Some(-90.0), Some(-180.0), None)).is_ok());
    assert!(validate_config(&create_test_config(Some(91.0), Some(0.0), None)).is_err());
    assert!(validate_config(&create_test_config(Some(0.0), Some(-181.0), None)).is_err());
    assert!(validate_config(&create_test_config(Some(f64::NAN), Some(0.0), None)).is_err());
}

#[test]
fn test_config_validation_requires_both_coordinates() {
    let err = validate_config(&create_test_config(Some(51.0), None, None)).unwrap_err();
    assert!(err.to_string().contains("longitude is missing"));
    assert!(validate_config(&create_test_config(None, Some(0.0), None)).is_err());
}

#[test]
fn test_config_validation_timezone() {
    assert!(validate_config(&create_test_config(None, None, Some("Asia/Kolkata"))).is_ok());
    assert!(validate_config(&create_test_config(None, None, Some("Nowhere/Special"))).is_err());
}

#[test]
fn test_config_accessors() {
    let config = create_test_config(Some(35.6762), Some(139.6503), Some("Asia/Tokyo"));
    let coordinate = config.coordinate().unwrap().unwrap();
    assert_eq!(coordinate.latitude(), 35.6762);
    assert_eq!(config.time_zone().unwrap(), Some(chrono_tz::Asia::Tokyo));
    assert_eq!(config.time_format(), TimeFormat::TwentyFourHour);

    let empty = Config::default();
    assert_eq!(empty.coordinate().unwrap(), None);
    assert_eq!(empty.time_zone().unwrap(), None);
}

#[test]
fn test_load_from_custom_dir() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("daylight.toml"),
        r#"
latitude = 64.1466
longitude = -21.9426
timezone = "Atlantic/Reykjavik"
time_format = "12h"
"#,
    )
    .unwrap();

    let config = Config::load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(64.1466));
    assert_eq!(config.longitude, Some(-21.9426));
    assert_eq!(config.timezone.as_deref(), Some("Atlantic/Reykjavik"));
    assert_eq!(config.time_format(), TimeFormat::TwelveHour);
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp_dir = tempdir().unwrap();
    let config = Config::load(Some(temp_dir.path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_geo_override_applies_over_main_config() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("daylight.toml"),
        "latitude = 10.0\nlongitude = 20.0\n",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("geo.toml"),
        "latitude = -33.8688\nlongitude = 151.2093\n",
    )
    .unwrap();

    let config = Config::load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(-33.8688));
    assert_eq!(config.longitude, Some(151.2093));
}

#[test]
fn test_geo_override_without_main_config() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("geo.toml"),
        "latitude = 48.8566\nlongitude = 2.3522\n",
    )
    .unwrap();

    let config = Config::load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(48.8566));
    assert_eq!(config.longitude, Some(2.3522));
}

#[test]
fn test_malformed_geo_toml_is_skipped() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("daylight.toml"),
        "latitude = 10.0\nlongitude = 20.0\n",
    )
    .unwrap();
    fs::write(temp_dir.path().join("geo.toml"), "latitude = [not toml").unwrap();

    let config = Config::load(Some(temp_dir.path())).unwrap();
    assert_eq!(config.latitude, Some(10.0));
}

#[test]
fn test_invalid_geo_override_fails_validation() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("daylight.toml"), "").unwrap();
    fs::write(
        temp_dir.path().join("geo.toml"),
        "latitude = 123.0\nlongitude = 0.0\n",
    )
    .unwrap();

    assert!(Config::load(Some(temp_dir.path())).is_err());
}

#[test]
fn test_parse_errors_carry_context() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("daylight.toml"), "time_format = \"36h\"\n").unwrap();

    let err = Config::load(Some(temp_dir.path())).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
#[serial]
fn test_default_path_follows_xdg_config_home() {
    let temp_dir = tempdir().unwrap();

    // Save and restore XDG_CONFIG_HOME
    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let path = get_config_path(None);

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    assert_eq!(
        path.unwrap(),
        temp_dir.path().join("daylight").join("daylight.toml")
    );
}
