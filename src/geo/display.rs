//! Display and formatting utilities for geo output.
//!
//! Event times are shown on the wall clock of the location's zone. When the
//! device runs in a different zone, the device reading follows in brackets,
//! so `21:21 [06:21]` means 21:21 at the location and 06:21 here.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

use crate::almanac::Almanac;
use crate::config::TimeFormat;
use crate::solar::Phase;
use crate::time::{TimeZoneAdjuster, format_offset, offset_seconds};

/// Format an instant in `zone`, adding the device reading when it differs.
///
/// # Display Format
/// - Same offset: "HH:MM"
/// - Different offsets: "HH:MM [HH:MM]" (coordinate time [device time])
pub fn format_time_for_display<D: TimeZone<Offset: std::fmt::Display>>(
    instant: DateTime<Utc>,
    zone: &Tz,
    format: TimeFormat,
    adjuster: &TimeZoneAdjuster<D>,
) -> String {
    let pattern = format.pattern();
    let coordinate_time = instant.with_timezone(zone).format(pattern).to_string();

    if adjuster.offset_shift(instant, zone).is_zero() {
        coordinate_time
    } else {
        let device_time = instant.with_timezone(adjuster.device()).format(pattern);
        format!("{coordinate_time} [{device_time}]")
    }
}

/// Like [`format_time_for_display`], for an event that may not happen.
pub fn format_event_time<D: TimeZone<Offset: std::fmt::Display>>(
    instant: Option<DateTime<Utc>>,
    zone: &Tz,
    format: TimeFormat,
    adjuster: &TimeZoneAdjuster<D>,
) -> String {
    match instant {
        Some(instant) => format_time_for_display(instant, zone, format, adjuster),
        None => "does not occur".to_string(),
    }
}

/// Render a duration as "16h 38m".
pub fn format_duration(duration: Duration) -> String {
    let sign = if duration < Duration::zero() { "-" } else { "" };
    let minutes = duration.num_minutes().abs();
    format!("{sign}{}h {:02}m", minutes / 60, minutes % 60)
}

/// Zone name with its offset at `instant`, e.g. "Europe/London (+01:00)".
pub fn format_zone_with_offset(zone: &Tz, instant: DateTime<Utc>) -> String {
    format!("{zone} ({})", format_offset(offset_seconds(instant, zone)))
}

/// Log the intermediate values behind one day's numbers.
///
/// Called by the commands when `--debug` is on.
pub fn log_solar_debug_info<D: TimeZone<Offset: std::fmt::Display>>(almanac: &Almanac, adjuster: &TimeZoneAdjuster<D>) {
    let day = almanac.day();
    let events = almanac.events();
    let daylight = almanac.daylight();
    let zone = day.time_zone();
    let noon = events.solar_noon();

    log_pipe!();
    log_debug!("Solar calculation details:");
    log_indented!("{:>20}: {}", "Coordinate", day.coordinate());
    log_indented!("{:>20}: {}", "Local date", day.date());
    log_indented!(
        "{:>20}: {}",
        "Calculation date",
        day.calculation_date()
    );
    log_indented!(
        "{:>20}: {}",
        "Coordinate timezone",
        format_zone_with_offset(&zone, noon)
    );

    let shift = adjuster.offset_shift(noon, &zone);
    if !shift.is_zero() {
        let device_offset = offset_seconds(noon, adjuster.device());
        log_indented!("{:>20}: {}", "Device offset", format_offset(device_offset));
        log_indented!(
            "{:>20}: {}",
            "Display shift",
            format_offset(shift.num_seconds() as i32)
        );
        // Shifted so the device clock reads the coordinate wall time
        let noon_on_device = adjuster.adjust(noon, &zone).adjusted();
        log_indented!(
            "{:>20}: {}",
            "Local solar noon",
            noon_on_device.with_timezone(adjuster.device()).format("%H:%M:%S")
        );
    }

    log_indented!("{:>20}: {}", "Solar noon UTC", noon.format("%H:%M:%S"));
    log_indented!(
        "{:>20}: {:.2}°",
        "Transit altitude",
        events.transit_altitude()
    );

    let culmination = almanac.culmination_offset();
    log_indented!(
        "{:>20}: {} after clock midday",
        "Culmination offset",
        format_duration(culmination)
    );

    log_indented!("--- Phases (UTC) ---");
    for event in events.iter() {
        let label = format!("{} ({}°)", event.phase.label(), event.phase.altitude());
        let value = event
            .instant
            .map(|instant| instant.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "none".to_string());
        log_indented!("{label:>26}: {value}");
    }

    log_indented!("--- Resolved daylight (UTC) ---");
    log_indented!(
        "{:>20}: {}",
        "Start of day",
        day.start_of_day().format("%Y-%m-%d %H:%M:%S")
    );
    log_indented!(
        "{:>20}: {}",
        "End of day",
        day.end_of_day().format("%Y-%m-%d %H:%M:%S")
    );
    log_indented!(
        "{:>20}: {}",
        "Begins",
        daylight.begins().format("%Y-%m-%d %H:%M:%S%.3f")
    );
    log_indented!(
        "{:>20}: {}",
        "Ends",
        daylight.ends().format("%Y-%m-%d %H:%M:%S%.3f")
    );
    log_indented!(
        "{:>20}: {:.3} s",
        "Duration",
        daylight.duration_seconds()
    );

    if events.get(Phase::Sunrise).is_none() || events.get(Phase::Sunset).is_none() {
        log_indented!("Sunrise or sunset missing, fallback chain applied");
    }
}
