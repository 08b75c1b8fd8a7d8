use chrono::{DateTime, Utc};

/// Short date for list rows, e.g. "14 Nov 2023".
#[must_use]
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%-d %b %Y").to_string()
}
