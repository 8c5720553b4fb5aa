use chrono::{DateTime, Utc};

/// Wall-clock stamp shown next to a practice result.
#[must_use]
pub fn format_clock_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M:%S UTC").to_string()
}
