//! Summary command: the day's daylight at a glance.
//!
//! Shows sunrise, culmination and sunset, total and remaining daylight, the
//! comparison sentence against the reference day, the next horizon crossing
//! and the surrounding solstices.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{LocationReport, Query, log_query_header, print_json, sentence_case};
use crate::almanac::Almanac;
use crate::comparison::{DayLabel, describe, reference_day_for};
use crate::daylight::DaylightInterval;
use crate::geo::SolarDay;
use crate::geo::display::{
    format_duration, format_event_time, format_time_for_display, log_solar_debug_info,
};
use crate::logger::Log;
use crate::solar::Phase;
use crate::solstice::{self, Solstice};

#[derive(Debug, Serialize)]
struct ComparisonReport {
    reference_date: NaiveDate,
    delta_seconds: f64,
    description: String,
}

#[derive(Debug, Serialize)]
struct EventReport {
    phase: Phase,
    instant: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct SolsticeReport {
    #[serde(flatten)]
    solstice: Solstice,
    daylight_seconds: f64,
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    location: LocationReport,
    date: NaiveDate,
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
    solar_noon: DateTime<Utc>,
    daylight: DaylightInterval,
    daylight_seconds: f64,
    daylight_proportion: f64,
    remaining_seconds: Option<f64>,
    comparison: ComparisonReport,
    previous_event: Option<EventReport>,
    next_event: Option<EventReport>,
    previous_solstice: Option<SolsticeReport>,
    next_solstice: Option<SolsticeReport>,
}

fn solstice_report(query: &Query, solstice: Solstice) -> SolsticeReport {
    let day = SolarDay::containing(
        solstice.instant,
        query.day.coordinate(),
        query.day.time_zone(),
    );
    SolsticeReport {
        solstice,
        daylight_seconds: Almanac::for_day(day).daylight().duration_seconds(),
    }
}

fn log_solstice(query: &Query, label: &str, report: Option<&SolsticeReport>) {
    let Some(report) = report else {
        log_error!("Could not locate the {} solstice", label.to_lowercase());
        return;
    };

    let local_date = report
        .solstice
        .instant
        .with_timezone(&query.day.time_zone())
        .format("%b %-d, %Y");
    let days = (report.solstice.instant - query.now).num_days();
    let distance = match days {
        0 => "today".to_string(),
        d if d > 0 => format!("in {d} days"),
        d => format!("{} days ago", -d),
    };
    log_indented!(
        "{label}: {} on {local_date}, {distance} ({} of daylight)",
        report.solstice.kind.label(),
        format_duration(chrono::Duration::milliseconds(
            (report.daylight_seconds * 1000.0) as i64
        ))
    );
}

/// Run the summary command for `query`.
pub fn run_summary(query: &Query, json: bool) -> Result<()> {
    let almanac = Almanac::for_day(query.day);
    let events = almanac.events();
    let daylight = *almanac.daylight();

    let reference_date = reference_day_for(query.day.date(), query.today);
    let reference = Almanac::for_day(query.day.with_date(reference_date));
    let comparison = almanac.compare_with(&reference);
    let description = describe(
        &comparison,
        &DayLabel::relative_to(query.day.date(), query.today),
        &DayLabel::relative_to(reference_date, query.today),
    );

    let remaining = (query.is_today() && daylight.contains(query.now))
        .then(|| daylight.remaining_at(query.now));
    let (previous_event, next_event) = if query.is_today() {
        (
            almanac.previous_solar_event(query.now),
            almanac.next_solar_event(query.now),
        )
    } else {
        (None, None)
    };
    let previous_solstice = solstice::previous(query.now).map(|s| solstice_report(query, s));
    let next_solstice = solstice::next(query.now).map(|s| solstice_report(query, s));

    if json {
        return print_json(&SummaryReport {
            location: LocationReport::for_query(query),
            date: query.day.date(),
            sunrise: events.get(Phase::Sunrise),
            sunset: events.get(Phase::Sunset),
            solar_noon: events.solar_noon(),
            daylight,
            daylight_seconds: daylight.duration_seconds(),
            daylight_proportion: almanac.daylight_proportion(),
            remaining_seconds: remaining.map(|r| r.num_milliseconds() as f64 / 1000.0),
            comparison: ComparisonReport {
                reference_date,
                delta_seconds: comparison.delta_seconds(),
                description,
            },
            previous_event: previous_event.map(|(phase, instant)| EventReport { phase, instant }),
            next_event: next_event.map(|(phase, instant)| EventReport { phase, instant }),
            previous_solstice,
            next_solstice,
        });
    }

    let tz = query.day.time_zone();
    let format = query.time_format;
    let adjuster = &query.adjuster;

    log_query_header(query);

    log_block_start!("Daylight");
    log_indented!(
        "Sunrise: {}",
        format_event_time(events.get(Phase::Sunrise), &tz, format, adjuster)
    );
    log_indented!(
        "Culmination: {}",
        format_time_for_display(daylight.peak(), &tz, format, adjuster)
    );
    log_indented!(
        "Sunset: {}",
        format_event_time(events.get(Phase::Sunset), &tz, format, adjuster)
    );
    log_indented!(
        "Total daylight: {} ({:.0}% of the day)",
        format_duration(daylight.duration()),
        almanac.daylight_proportion() * 100.0
    );
    if let Some(remaining) = remaining {
        log_indented!("Remaining: {}", format_duration(remaining));
    }

    log_block_start!("{}", sentence_case(&description));

    if let Some((phase, instant)) = previous_event {
        log_block_start!(
            "Last {} at {} ({} ago)",
            phase.label().to_lowercase(),
            format_time_for_display(instant, &tz, format, adjuster),
            format_duration(query.now - instant)
        );
    }
    if let Some((phase, instant)) = next_event {
        log_decorated!(
            "Next {} at {} (in {})",
            phase.label().to_lowercase(),
            format_time_for_display(instant, &tz, format, adjuster),
            format_duration(instant - query.now)
        );
    }

    log_block_start!("Solstices");
    log_solstice(query, "Previous", previous_solstice.as_ref());
    log_solstice(query, "Next", next_solstice.as_ref());

    if Log::is_debug() {
        log_solar_debug_info(&almanac, adjuster);
    }

    log_end!();
    Ok(())
}
