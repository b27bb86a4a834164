//! Parse-or-default helpers for receipt fields.
//!
//! Receipt amounts, dates and times arrive as free text. Rather than
//! rejecting a receipt, each helper falls back to a zero value when the
//! text does not parse, so scoring always completes.

use chrono::{NaiveDate, NaiveTime};

pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";
pub const PURCHASE_TIME_FORMAT: &str = "%H:%M";

/// Parses a decimal amount such as `"35.35"`, or `0.0` if it does not parse.
pub fn parse_amount(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Parses a `YYYY-MM-DD` date, or 1970-01-01 if it does not parse.
///
/// The text must be exactly the canonical rendering: unpadded fields,
/// signs and surrounding whitespace all fall back.
pub fn parse_purchase_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, PURCHASE_DATE_FORMAT)
        .ok()
        .filter(|date| {
            starts_with_digit(raw) && date.format(PURCHASE_DATE_FORMAT).to_string() == raw
        })
        .unwrap_or_default()
}

/// Parses a 24-hour `HH:MM` time, or midnight if it does not parse.
///
/// Both fields must be two digits; anything else falls back.
pub fn parse_purchase_time(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, PURCHASE_TIME_FORMAT)
        .ok()
        .filter(|time| time.format(PURCHASE_TIME_FORMAT).to_string() == raw)
        .unwrap_or_default()
}

// chrono renders years past 9999 with a leading `+`.
fn starts_with_digit(raw: &str) -> bool {
    raw.starts_with(|c: char| c.is_ascii_digit())
}
