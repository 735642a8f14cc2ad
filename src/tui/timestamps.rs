use chrono::{DateTime, Local, Utc};

/// Local month/day and clock time, e.g. "1/5 09:03"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-m/%-d %H:%M").to_string()
}
