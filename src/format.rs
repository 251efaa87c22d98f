//! Date formatting for profile display. Output is US English, rendered in UTC.

use chrono::{DateTime, Utc};

/// Long date, e.g. `October 15, 2026`.
pub fn format_long_date(ts: &DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

/// Short date with 12-hour time, e.g. `Oct 15, 2026, 09:05 AM`.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y, %I:%M %p").to_string()
}
