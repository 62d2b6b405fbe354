//! Colloquial rendering of short durations.

/// Render a duration in seconds as hours and minutes, e.g. "1 hour, 2 minutes".
///
/// The sign is ignored and sub-minute remainders are dropped. A non-zero
/// duration under one minute reads "less than a minute"; exactly zero (or a
/// non-finite value) reads "no", as in "no more daylight".
pub fn humanize_duration(seconds: f64) -> String {
    let seconds = seconds.abs();
    if seconds == 0.0 || !seconds.is_finite() {
        return "no".to_string();
    }
    if seconds < 60.0 {
        return "less than a minute".to_string();
    }

    let total_minutes = (seconds / 60.0).floor() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    parts.join(", ")
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
