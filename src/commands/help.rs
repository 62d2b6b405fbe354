//! Help command implementation.
//!
//! Dispatches `daylight help [COMMAND]` to the detailed help of one command,
//! or to the command overview when no command is named.

use anyhow::Result;

/// Show brief usage for a command (used for error messages)
pub fn show_command_usage(command: &str) {
    match command {
        "summary" => log_block_start!("Usage: daylight [OPTIONS] summary"),
        "events" => log_block_start!("Usage: daylight [OPTIONS] events"),
        "compare" => log_block_start!("Usage: daylight [OPTIONS] compare [YYYY-MM-DD]"),
        "help" => log_block_start!("Usage: daylight help [COMMAND]"),
        _ => log_block_start!("Usage: daylight [OPTIONS] [COMMAND]"),
    }
}

/// Run the help command (dispatcher)
///
/// # Arguments
/// * `command` - Optional command name to get help for (None = general help)
pub fn run_help_command(command: Option<&str>) -> Result<()> {
    match command {
        None => display_general_help(),
        Some("summary") => display_summary_help(),
        Some("events") => display_events_help(),
        Some("compare") => display_compare_help(),
        Some("help") => display_help_help(),
        Some(unknown) => {
            log_warning!("Unknown command: {}", unknown);
            display_general_help();
        }
    }
    Ok(())
}

/// Display general help focused on commands (for the help command)
fn display_general_help() {
    log_version!();
    log_block_start!("Available Commands:");
    log_indented!("summary                Daylight, comparison and solstices (default)");
    log_indented!("events                 Sunrise, sunset and twilight times");
    log_indented!("compare [YYYY-MM-DD]   Compare daylight against another day");
    log_indented!("help [COMMAND]         Show detailed help for a command");
    log_pipe!();
    log_info!("Use 'daylight help <command>' to see detailed help for a specific command.");
    log_indented!("Use 'daylight --help' to see all options and general usage.");
    log_end!();
}

fn display_summary_help() {
    log_version!();
    log_block_start!("summary - Daylight at a glance");
    show_command_usage("summary");
    log_block_start!("Shows:");
    log_indented!("Sunrise, solar culmination and sunset on the location's wall clock");
    log_indented!("Total daylight, and what is left of it when the day is today");
    log_indented!("How much daylight was gained or lost against the reference day");
    log_indented!("The next sunrise or sunset, and the surrounding solstices");
    log_block_start!("Notes:");
    log_indented!("Without a sunrise or sunset the daylight span falls back to twilight");
    log_indented!("phases, the whole local day, or a zero-width sliver at polar night.");
    log_block_start!("Examples:");
    log_indented!("# Today at the configured location");
    log_indented!("daylight");
    log_pipe!();
    log_indented!("# Midsummer in Tromsø");
    log_indented!("daylight summary --lat 69.6492 --lon 18.9553 --date 2024-06-21");
    log_end!();
}

fn display_events_help() {
    log_version!();
    log_block_start!("events - Sunrise, sunset and twilight times");
    show_command_usage("events");
    log_block_start!("Phases (in order through the day):");
    log_indented!("Astronomical dawn  Sun rises through -18°");
    log_indented!("Nautical dawn      Sun rises through -12°");
    log_indented!("Civil dawn         Sun rises through -6°");
    log_indented!("Sunrise            Upper limb clears the horizon (-0.833°)");
    log_indented!("Sunset, civil, nautical and astronomical dusk mirror them");
    log_pipe!();
    log_indented!("Phases the sun never reaches on that day are shown as 'does not occur'.");
    log_block_start!("Examples:");
    log_indented!("daylight events --date 2024-12-21");
    log_indented!("daylight events --json");
    log_end!();
}

fn display_compare_help() {
    log_version!();
    log_block_start!("compare - Compare daylight against another day");
    show_command_usage("compare");
    log_block_start!("Arguments:");
    log_indented!("YYYY-MM-DD  Optional reference day");
    log_indented!("            Defaults to yesterday when showing today,");
    log_indented!("            and to today for any other day");
    log_block_start!("Examples:");
    log_indented!("# Today against yesterday");
    log_indented!("daylight compare");
    log_pipe!();
    log_indented!("# The winter solstice against today");
    log_indented!("daylight compare --date 2024-12-21");
    log_pipe!();
    log_indented!("# Two explicit days");
    log_indented!("daylight compare --date 2024-06-21 2024-03-20");
    log_end!();
}

/// Display help for the help command itself
fn display_help_help() {
    log_version!();
    log_block_start!("help - Display help information");
    show_command_usage("help");
    log_block_start!("Arguments:");
    log_indented!("COMMAND  Optional command to get help for");
    log_indented!("         If omitted, shows general help");
    log_block_start!("Examples:");
    log_indented!("# Show general help");
    log_indented!("daylight help");
    log_pipe!();
    log_indented!("# Show help for specific commands");
    log_indented!("daylight help events");
    log_indented!("daylight help compare");
    log_end!();
}
