//! # Raw Input Parsing
//!
//! Helpers for callers holding form fields as strings. The core never splits
//! or interprets free text; these functions only turn one already-isolated
//! field into a number, integer or date.
//!
//! Empty and non-numeric fields come back as `None` so the caller can report
//! [`Outcome::Pending`](crate::outcome::Outcome::Pending) instead of a bogus zero.

use chrono::NaiveDate;

use crate::errors::{CalcError, CalcResult};

/// Parse a numeric field. Empty, non-numeric and non-finite text yields `None`.
///
/// ```rust
/// use calc_core::input::parse_number;
///
/// assert_eq!(parse_number(" 12.5 "), Some(12.5));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("abc"), None);
/// assert_eq!(parse_number("0"), Some(0.0));
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an integer field.
///
/// Empty or non-numeric text is `Ok(None)`. A number with a fractional part
/// is an error because integer calculators must not silently truncate.
pub fn parse_integer(field: &str, raw: &str) -> CalcResult<Option<i64>> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(Some(value));
    }
    match parse_number(trimmed) {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(Some(v as i64)),
        Some(v) => Err(CalcError::invalid_input(field, v.to_string(), "Value must be a whole number")),
    }
}

/// Parse a list of already-split entries, keeping only the numeric ones.
pub fn parse_list<S: AsRef<str>>(items: &[S]) -> Vec<f64> {
    items.iter().filter_map(|s| parse_number(s.as_ref())).collect()
}

/// Parse an ISO `YYYY-MM-DD` date field.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
