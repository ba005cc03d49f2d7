//! Conversions between stored `date_applied` strings, the form's date input,
//! and display text.
//!
//! Everything is read on the UTC calendar so a date never shifts between
//! what was saved and what the form shows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::ValidationError;

/// Format of the form's calendar-date input.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse any accepted representation into a UTC instant.
pub fn parse_date_applied(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT) {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Canonical wire form: `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn to_wire(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize a date from any accepted input into the canonical wire string.
pub fn normalize_date_applied(input: &str) -> Result<String, ValidationError> {
    parse_date_applied(input)
        .map(to_wire)
        .ok_or_else(|| ValidationError::InvalidDate(input.to_string()))
}

/// The calendar date a stored string should show in the form's date input.
pub fn date_input_value(stored: &str) -> Option<String> {
    parse_date_applied(stored).map(|dt| dt.date_naive().format(DATE_INPUT_FORMAT).to_string())
}

/// Short localized date (`M/D/YYYY`), or the raw string if it can't be parsed.
pub fn display_date(stored: &str) -> String {
    match parse_date_applied(stored) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => stored.to_string(),
    }
}
