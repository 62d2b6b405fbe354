//! Command-line command handlers for daylight.
//!
//! Every query command goes through [`build_query`], which plays the part of
//! the location and current-instant collaborators: it settles the coordinate
//! (command line, then configuration, then the documented default), the zone
//! (command line, configuration, lookup from the coordinate) and the day to
//! show. The individual commands only format the results.

pub mod compare;
pub mod events;
pub mod help;
pub mod summary;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::args::QueryOptions;
use crate::config::{Config, TimeFormat, get_config_path};
use crate::constants::DEFAULT_TIMEZONE;
use crate::geo::display::format_zone_with_offset;
use crate::geo::{Coordinate, SolarDay, determine_timezone_from_coordinates, parse_time_zone};
use crate::logger::Log;
use crate::time::source::parse_datetime_in_tz;
use crate::time::{
    FixedTimeSource, OffsetTimeSource, RealTimeSource, TimeSource, TimeZoneAdjuster,
};

/// Where the coordinate of a query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    CommandLine,
    Config,
    Default,
}

impl LocationSource {
    fn describe(self) -> &'static str {
        match self {
            LocationSource::CommandLine => "from command line",
            LocationSource::Config => "from configuration",
            LocationSource::Default => "default location",
        }
    }
}

/// Everything a command needs to answer one request.
#[derive(Debug, Clone)]
pub struct Query {
    pub config: Config,
    pub config_path: PathBuf,
    pub location_source: LocationSource,
    /// The day being shown
    pub day: SolarDay,
    /// Today's date on the location's wall clock
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
    pub simulated: bool,
    pub time_format: TimeFormat,
    pub adjuster: TimeZoneAdjuster,
}

impl Query {
    pub fn is_today(&self) -> bool {
        self.day.date() == self.today
    }
}

/// Switch output modes and run `command` with a query built from `options`.
///
/// The clock is the real one, shifted by `--offset` days.
pub fn run(options: &QueryOptions, command: impl FnOnce(&Query, bool) -> Result<()>) -> Result<()> {
    Log::set_enabled(!options.json);
    Log::set_debug(options.debug_enabled);

    let source = OffsetTimeSource::new(RealTimeSource, options.day_offset);
    let query = build_query(options, &source)?;
    command(&query, options.json)
}

fn resolve_coordinate(
    options: &QueryOptions,
    config: &Config,
) -> Result<(Coordinate, LocationSource)> {
    match (options.latitude, options.longitude) {
        (Some(latitude), Some(longitude)) => {
            let coordinate = Coordinate::new(latitude, longitude)
                .context("Invalid coordinates on the command line")?;
            return Ok((coordinate, LocationSource::CommandLine));
        }
        (Some(_), None) | (None, Some(_)) => {
            anyhow::bail!("--lat and --lon must be given together")
        }
        (None, None) => {}
    }

    Ok(match config.coordinate()? {
        Some(coordinate) => (coordinate, LocationSource::Config),
        None => (Coordinate::DEFAULT, LocationSource::Default),
    })
}

fn resolve_time_zone(
    options: &QueryOptions,
    config: &Config,
    coordinate: &Coordinate,
    location_source: LocationSource,
) -> Result<Tz> {
    if let Some(ref name) = options.timezone {
        return Ok(parse_time_zone(name)?);
    }
    if let Some(tz) = config.time_zone()? {
        return Ok(tz);
    }
    if location_source == LocationSource::Default {
        return Ok(parse_time_zone(DEFAULT_TIMEZONE)?);
    }
    Ok(determine_timezone_from_coordinates(coordinate))
}

/// Clock pinned by `--at`, read on the wall clock of `time_zone`.
fn pinned_source(options: &QueryOptions, time_zone: Tz) -> Result<Option<impl TimeSource>> {
    let Some(ref at) = options.at else {
        return Ok(None);
    };
    let pinned = parse_datetime_in_tz(at, time_zone).map_err(anyhow::Error::msg)?;
    Ok(Some(OffsetTimeSource::new(
        FixedTimeSource::new(pinned.with_timezone(&Utc)),
        options.day_offset,
    )))
}

/// Build the query for `options`, reading "now" from `source`.
///
/// A time pinned with `--at` replaces `source`; the day offset still applies.
pub fn build_query(options: &QueryOptions, source: &dyn TimeSource) -> Result<Query> {
    let config_dir = options.config_dir.as_deref().map(Path::new);
    let config_path = get_config_path(config_dir)?;

    let config = match Config::load(config_dir) {
        Ok(config) => config,
        Err(e) => {
            log_pipe!();
            log_critical!("Configuration could not be loaded");
            return Err(e);
        }
    };

    let (coordinate, location_source) = resolve_coordinate(options, &config)?;
    let time_zone = resolve_time_zone(options, &config, &coordinate, location_source)?;

    let (now, simulated) = match pinned_source(options, time_zone)? {
        Some(pinned) => (pinned.now(), true),
        None => (source.now(), source.is_simulated()),
    };
    let today = now.with_timezone(&time_zone).date_naive();
    let date = options.date.unwrap_or(today);

    Ok(Query {
        time_format: config.time_format(),
        config,
        config_path,
        location_source,
        day: SolarDay::new(date, coordinate, time_zone),
        today,
        now,
        simulated,
        adjuster: TimeZoneAdjuster::for_local_device(),
    })
}

/// Open the text output: version header, configuration (debug), location.
pub(crate) fn log_query_header(query: &Query) {
    log_version!();

    if Log::is_debug() {
        log_pipe!();
        log_debug!("Debug mode enabled - showing calculation details");
        query.config.log_config(&query.config_path);
    }

    if query.simulated {
        log_pipe!();
        log_info!(
            "Time machine: today is {} at this location",
            query.today.format("%a, %b %-d, %Y")
        );
    }

    let day = &query.day;
    log_block_start!(
        "{} ({})",
        day.coordinate(),
        query.location_source.describe()
    );
    log_indented!(
        "Timezone: {}",
        format_zone_with_offset(&day.time_zone(), day.noon().with_timezone(&Utc))
    );
    log_indented!("Date: {}", day.date().format("%a, %b %-d, %Y"));
}

/// Capitalize the first letter of a sentence or label.
pub(crate) fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Location block shared by the JSON documents.
#[derive(Debug, Serialize)]
pub(crate) struct LocationReport {
    pub coordinate: Coordinate,
    pub source: LocationSource,
    pub time_zone: String,
}

impl LocationReport {
    pub(crate) fn for_query(query: &Query) -> Self {
        Self {
            coordinate: query.day.coordinate(),
            source: query.location_source,
            time_zone: query.day.time_zone().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    fn options_in(dir: &Path) -> QueryOptions {
        QueryOptions {
            config_dir: Some(dir.to_string_lossy().into_owned()),
            ..QueryOptions::default()
        }
    }

    fn clock() -> FixedTimeSource {
        // 23:30 UTC is already the next day in London (BST)
        FixedTimeSource::new(Utc.with_ymd_and_hms(2024, 6, 20, 23, 30, 0).unwrap())
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            sentence_case("less than a minute less daylight today than yesterday."),
            "Less than a minute less daylight today than yesterday."
        );
        assert_eq!(sentence_case("2 minutes"), "2 minutes");
        assert_eq!(sentence_case(""), "");
    }

    #[test]
    fn test_defaults_to_london() {
        let dir = tempdir().unwrap();
        let query = build_query(&options_in(dir.path()), &clock()).unwrap();
        assert_eq!(query.location_source, LocationSource::Default);
        assert_eq!(query.day.coordinate(), Coordinate::DEFAULT);
        assert_eq!(query.day.time_zone(), chrono_tz::Europe::London);
        assert_eq!(query.today, NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert!(query.is_today());
        assert!(query.simulated);
    }

    #[test]
    fn test_command_line_overrides_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("daylight.toml"),
            "latitude = 48.8566\nlongitude = 2.3522\ntimezone = \"Europe/Paris\"\n",
        )
        .unwrap();

        let from_config = build_query(&options_in(dir.path()), &clock()).unwrap();
        assert_eq!(from_config.location_source, LocationSource::Config);
        assert_eq!(from_config.day.time_zone(), chrono_tz::Europe::Paris);

        let options = QueryOptions {
            latitude: Some(35.6762),
            longitude: Some(139.6503),
            timezone: Some("Asia/Tokyo".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 12, 21),
            ..options_in(dir.path())
        };
        let query = build_query(&options, &clock()).unwrap();
        assert_eq!(query.location_source, LocationSource::CommandLine);
        assert_eq!(query.day.time_zone(), chrono_tz::Asia::Tokyo);
        assert_eq!(query.today, NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(query.day.date(), NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
        assert!(!query.is_today());
    }

    #[test]
    fn test_zone_is_looked_up_from_coordinates() {
        let dir = tempdir().unwrap();
        let options = QueryOptions {
            latitude: Some(40.7128),
            longitude: Some(-74.0060),
            ..options_in(dir.path())
        };
        let query = build_query(&options, &clock()).unwrap();
        assert_eq!(query.day.time_zone(), chrono_tz::America::New_York);
        assert_eq!(query.today, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
    }

    #[test]
    fn test_half_a_coordinate_is_rejected() {
        let dir = tempdir().unwrap();
        let options = QueryOptions {
            latitude: Some(40.0),
            ..options_in(dir.path())
        };
        assert!(build_query(&options, &clock()).is_err());

        let options = QueryOptions {
            latitude: Some(100.0),
            longitude: Some(0.0),
            ..options_in(dir.path())
        };
        assert!(build_query(&options, &clock()).is_err());
    }

    #[test]
    fn test_pinned_now_is_read_in_the_location_zone() {
        let dir = tempdir().unwrap();
        let options = QueryOptions {
            latitude: Some(35.6762),
            longitude: Some(139.6503),
            timezone: Some("Asia/Tokyo".to_string()),
            at: Some("2024-01-01 08:00:00".to_string()),
            day_offset: 1,
            ..options_in(dir.path())
        };
        let query = build_query(&options, &RealTimeSource).unwrap();
        assert_eq!(query.now, Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap());
        assert_eq!(query.today, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!(query.simulated);

        // Inside London's spring-forward gap
        let options = QueryOptions {
            at: Some("2024-03-31 01:30:00".to_string()),
            ..options_in(dir.path())
        };
        assert!(build_query(&options, &RealTimeSource).is_err());
    }

    #[test]
    fn test_time_machine_moves_today() {
        let dir = tempdir().unwrap();
        let source = OffsetTimeSource::new(clock(), 10);
        let query = build_query(&options_in(dir.path()), &source).unwrap();
        assert_eq!(query.today, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    }
}
