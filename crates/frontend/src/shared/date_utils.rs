//! Utilities for date formatting
//!
//! Backend dates arrive as RFC 3339 date-times, naive date-times or plain
//! `YYYY-MM-DD` dates.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date shown in tables: DD/MM/YYYY
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a date-like string, keeping only the calendar date
///
/// RFC 3339 values keep the date of their own offset.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a date-like string as DD/MM/YYYY
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(value: &str) -> Option<String> {
    parse_date(value).map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}
