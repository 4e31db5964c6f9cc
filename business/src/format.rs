//! Display formatting for encounter dates.

use chrono::{DateTime, NaiveDate};

/// Formats an encounter date like `Tue, Mar 5, 2024`.
///
/// Accepts RFC 3339 timestamps (the calendar date in the given offset is used)
/// and bare `YYYY-MM-DD` dates. Anything else is returned unchanged.
pub fn format_encounter_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%a, %b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}
