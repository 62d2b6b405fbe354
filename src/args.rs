//! Command-line argument parsing and processing.
//!
//! This module turns the raw argument list into a [`CliAction`]. Options may
//! appear anywhere on the line; the first positional argument is the command
//! and defaults to `summary`. Malformed values are reported with a warning
//! and lead to [`CliAction::ShowHelpDueToError`].

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::geo::parse_time_zone;
use crate::time::source::{parse_date, parse_datetime_in_tz};

/// Options shared by every query command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Latitude from `--lat`, overriding the configuration
    pub latitude: Option<f64>,
    /// Longitude from `--lon`, overriding the configuration
    pub longitude: Option<f64>,
    /// Zone from `--tz`, overriding the configuration and the lookup
    pub timezone: Option<String>,
    /// Explicit date from `--date`
    pub date: Option<NaiveDate>,
    /// Wall-clock "now" at the location from `--at`
    pub at: Option<String>,
    /// Days added to "now" with `--offset` (the time machine)
    pub day_offset: i64,
    pub json: bool,
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Daylight overview for one day (the default)
    Summary { options: QueryOptions },
    /// Every phase crossing for one day
    Events { options: QueryOptions },
    /// Daylight comparison against a reference day
    Compare {
        options: QueryOptions,
        reference: Option<NaiveDate>,
    },
    /// Help for a single command
    Help { command: Option<String> },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to invalid arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

/// Options that consume the following argument.
const VALUE_OPTIONS: [&str; 8] = [
    "--lat", "--lon", "--tz", "--date", "--at", "--offset", "--config", "-c",
];

fn apply_value_option(options: &mut QueryOptions, flag: &str, value: &str) -> Result<()> {
    match flag {
        "--lat" => {
            options.latitude = Some(
                value
                    .parse()
                    .with_context(|| format!("Invalid latitude '{value}'"))?,
            );
        }
        "--lon" => {
            options.longitude = Some(
                value
                    .parse()
                    .with_context(|| format!("Invalid longitude '{value}'"))?,
            );
        }
        "--tz" => {
            parse_time_zone(value)?;
            options.timezone = Some(value.to_string());
        }
        "--date" => {
            options.date = Some(parse_date(value).map_err(anyhow::Error::msg)?);
        }
        "--at" => {
            // Only the syntax can be checked before the zone is known
            parse_datetime_in_tz(value, chrono_tz::UTC).map_err(anyhow::Error::msg)?;
            options.at = Some(value.to_string());
        }
        "--offset" => {
            options.day_offset = value
                .parse()
                .with_context(|| format!("Invalid day offset '{value}'"))?;
        }
        "--config" | "-c" => options.config_dir = Some(value.to_string()),
        _ => anyhow::bail!("Unknown option: {flag}"),
    }
    Ok(())
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Help and version take precedence over everything else
        if args_vec.iter().any(|arg| arg == "--version" || arg == "-V") {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }
        if args_vec.iter().any(|arg| arg == "--help" || arg == "-h") {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }

        let error = ParsedArgs {
            action: CliAction::ShowHelpDueToError,
        };

        let mut options = QueryOptions::default();
        let mut positionals: Vec<&str> = Vec::new();
        let mut idx = 0;

        while idx < args_vec.len() {
            let arg = args_vec[idx].as_str();
            match arg {
                "--debug" | "-d" => options.debug_enabled = true,
                "--json" | "-j" => options.json = true,
                flag if VALUE_OPTIONS.contains(&flag) => {
                    let Some(value) = args_vec.get(idx + 1) else {
                        log_warning!("Missing value for {flag}");
                        return error;
                    };
                    if let Err(e) = apply_value_option(&mut options, flag, value) {
                        log_warning!("{e:#}");
                        return error;
                    }
                    idx += 1;
                }
                flag if flag.starts_with('-') => {
                    log_warning!("Unknown option: {flag}");
                    return error;
                }
                positional => positionals.push(positional),
            }
            idx += 1;
        }

        let action = match positionals.as_slice() {
            [] | ["summary"] => CliAction::Summary { options },
            ["events"] => CliAction::Events { options },
            ["compare"] => CliAction::Compare {
                options,
                reference: None,
            },
            ["compare", reference] => match parse_date(reference) {
                Ok(date) => CliAction::Compare {
                    options,
                    reference: Some(date),
                },
                Err(e) => {
                    log_warning!("{e}");
                    return error;
                }
            },
            ["help"] => CliAction::Help { command: None },
            ["help", command] => CliAction::Help {
                command: Some(command.to_string()),
            },
            [command, ..] => {
                log_warning!("Unknown command or extra arguments: {command}");
                return error;
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_end!();
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("daylight [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("    --lat <degrees>    Latitude (-90 to 90), overrides the config");
    log_indented!("    --lon <degrees>    Longitude (-180 to 180), overrides the config");
    log_indented!("    --tz <zone>        IANA timezone, e.g. Europe/London");
    log_indented!("    --date <date>      Day to show (YYYY-MM-DD), default today");
    log_indented!("    --at <datetime>    Pin now to a local time (YYYY-MM-DD HH:MM:SS)");
    log_indented!("    --offset <days>    Shift today by a number of days");
    log_indented!("-j, --json             Print JSON instead of text");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("summary                Daylight, comparison and solstices (default)");
    log_indented!("events                 Sunrise, sunset and twilight times");
    log_indented!("compare [YYYY-MM-DD]   Compare daylight against another day");
    log_indented!("help [COMMAND]         Show detailed help for a command");
    log_end!();
}
