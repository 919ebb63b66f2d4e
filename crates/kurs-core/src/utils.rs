//! Utility functions for the Kursverwaltung overview

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts accepted in addition to RFC 3339
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 date or date-time into local wall-clock time
///
/// A date without time maps to local midnight. Values carrying an offset are
/// converted to the local time zone. Returns `None` for anything else.
#[must_use]
pub fn parse_iso_datetime(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Keep at most `max_chars` characters of `value`
#[must_use]
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
