//! Calendar date parsing with consistent error handling.
//!
//! Dates are stored as `YYYY-MM-DD`. Older values written as full RFC3339
//! timestamps are still accepted; only their calendar date is kept.

use chrono::{DateTime, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored date, returning an error if parsing fails.
///
/// # Examples
///
/// ```
/// use landfall_domain::common::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("2024-09-02").unwrap();
/// assert_eq!(date.month(), 9);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is neither `YYYY-MM-DD` nor RFC3339.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
}

/// Parses a stored date, falling back to `default` on error.
pub fn parse_date_or(s: &str, default: NaiveDate) -> NaiveDate {
    parse_date(s).unwrap_or(default)
}

/// Formats a date the way it is written to storage.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
