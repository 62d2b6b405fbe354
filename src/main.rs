//! Main application entry point.
//!
//! Parses the command line and dispatches to the matching command in the
//! library. Help and version requests never touch the configuration; every
//! query command goes through `commands::run`, which builds the query
//! (location, zone, day) before the command formats its output.

use anyhow::Result;
use std::process;

use daylight::args::{self, CliAction, ParsedArgs};
use daylight::commands::{self, compare, events, help, summary};
use daylight::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use daylight::log_error_exit;
use daylight::logger::Log;

fn dispatch(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            process::exit(EXIT_FAILURE);
        }
        CliAction::Help { command } => help::run_help_command(command.as_deref()),
        CliAction::Summary { options } => commands::run(&options, summary::run_summary),
        CliAction::Events { options } => commands::run(&options, events::run_events),
        CliAction::Compare { options, reference } => commands::run(&options, |query, json| {
            compare::run_compare(query, reference, json)
        }),
    }
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    if let Err(e) = dispatch(parsed_args.action) {
        // JSON mode silences the logger; errors are always shown
        Log::set_enabled(true);
        log_error_exit!("{e:#}");
        process::exit(EXIT_FAILURE);
    }

    process::exit(EXIT_SUCCESS);
}
