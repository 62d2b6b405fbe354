//! Events command: every twilight phase for one day.

use anyhow::Result;
use serde::Serialize;

use super::{LocationReport, Query, log_query_header, print_json};
use crate::almanac::Almanac;
use crate::daylight::DaylightInterval;
use crate::geo::display::{format_event_time, format_time_for_display, log_solar_debug_info};
use crate::logger::Log;
use crate::solar::SolarEvents;
use crate::time::wall_clock_components;

#[derive(Debug, Serialize)]
struct EventsReport<'a> {
    location: LocationReport,
    events: &'a SolarEvents,
    daylight: &'a DaylightInterval,
}

/// Run the events command for `query`.
pub fn run_events(query: &Query, json: bool) -> Result<()> {
    let almanac = Almanac::for_day(query.day);
    let events = almanac.events();

    if json {
        return print_json(&EventsReport {
            location: LocationReport::for_query(query),
            events,
            daylight: almanac.daylight(),
        });
    }

    let tz = query.day.time_zone();
    let format = query.time_format;
    let adjuster = &query.adjuster;

    log_query_header(query);

    log_block_start!("Solar events");
    for event in events.iter() {
        log_indented!(
            "{:>18}: {}",
            event.phase.label(),
            format_event_time(event.instant, &tz, format, adjuster)
        );
    }

    let noon = events.solar_noon();
    let clock = wall_clock_components(noon, &tz);
    log_block_start!(
        "Solar noon at {} ({:.1}° above the horizon)",
        format_time_for_display(noon, &tz, format, adjuster),
        events.transit_altitude()
    );
    log_indented!(
        "{:.1}% of the way through the local day",
        f64::from(clock.seconds_from_midnight()) / 864.0
    );

    if Log::is_debug() {
        log_solar_debug_info(&almanac, adjuster);
    }

    log_end!();
    Ok(())
}
