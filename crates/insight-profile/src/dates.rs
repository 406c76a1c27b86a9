//! Calendar date recognition.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%a %b %d %Y",
];

/// Month-only layouts as `(prefix, suffix, format)`. The affixes complete
/// the value to the first of the month.
const MONTH_LAYOUTS: &[(&str, &str, &str)] = &[
    ("", "-01", "%Y-%m-%d"),
    ("", "/01", "%Y/%m/%d"),
    ("1 ", "", "%d %b %Y"),
    ("1 ", "", "%d %B %Y"),
];

/// Date-time layouts without an offset. `%.f` also accepts no fraction.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses `text` as a calendar date, returning the date part.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.date_naive());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|parsed| parsed.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        })
        .or_else(|| parse_month(trimmed))
}

fn parse_month(text: &str) -> Option<NaiveDate> {
    MONTH_LAYOUTS.iter().find_map(|(prefix, suffix, format)| {
        NaiveDate::parse_from_str(&format!("{prefix}{text}{suffix}"), format).ok()
    })
}
