//! Compare command: daylight on the chosen day against a reference day.
//!
//! Without an explicit reference the day is compared against yesterday when
//! it is today, and against today otherwise.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use super::{LocationReport, Query, log_query_header, print_json, sentence_case};
use crate::almanac::Almanac;
use crate::comparison::{DayLabel, DaylightComparison, describe, reference_day_for};
use crate::geo::display::{format_duration, format_time_for_display, log_solar_debug_info};
use crate::logger::Log;

#[derive(Debug, Serialize)]
struct CompareReport {
    location: LocationReport,
    date: NaiveDate,
    reference_date: NaiveDate,
    comparison: DaylightComparison,
    description: String,
}

fn log_day(query: &Query, label: &DayLabel, almanac: &Almanac) {
    let tz = query.day.time_zone();
    let daylight = almanac.daylight();
    log_indented!(
        "{:<14} {} - {} ({})",
        format!("{}:", sentence_case(&label.to_string())),
        format_time_for_display(daylight.begins(), &tz, query.time_format, &query.adjuster),
        format_time_for_display(daylight.ends(), &tz, query.time_format, &query.adjuster),
        format_duration(daylight.duration())
    );
}

/// Run the compare command for `query`.
pub fn run_compare(query: &Query, reference: Option<NaiveDate>, json: bool) -> Result<()> {
    let reference_date =
        reference.unwrap_or_else(|| reference_day_for(query.day.date(), query.today));

    let current = Almanac::for_day(query.day);
    let reference = Almanac::for_day(query.day.with_date(reference_date));
    let comparison = current.compare_with(&reference);

    let current_label = DayLabel::relative_to(query.day.date(), query.today);
    let reference_label = DayLabel::relative_to(reference_date, query.today);
    let description = describe(&comparison, &current_label, &reference_label);

    if json {
        return print_json(&CompareReport {
            location: LocationReport::for_query(query),
            date: query.day.date(),
            reference_date,
            comparison,
            description,
        });
    }

    log_query_header(query);

    log_block_start!("Daylight");
    log_day(query, &current_label, &current);
    log_day(query, &reference_label, &reference);

    log_block_start!(description);
    log_indented!("Difference: {:+.1} seconds", comparison.delta_seconds());

    if Log::is_debug() {
        log_solar_debug_info(&current, &query.adjuster);
        log_solar_debug_info(&reference, &query.adjuster);
    }

    log_end!();
    Ok(())
}
