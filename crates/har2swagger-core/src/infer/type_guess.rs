//! Primitive type guessing for string-valued parameters.
//!
//! Checks run in a fixed order and the first match wins: numeric literal,
//! boolean, calendar date/time, then plain string. Numbers are tested before
//! dates because strings like `"2024"` parse as both.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts accepted in addition to RFC 3339 and RFC 2822
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// A Swagger primitive `type` with its optional `format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessedType {
    pub type_: &'static str,
    pub format: Option<&'static str>,
}

impl GuessedType {
    pub const fn new(type_: &'static str, format: Option<&'static str>) -> Self {
        Self { type_, format }
    }

    /// Plain `string` with no format
    pub const fn string() -> Self {
        Self::new("string", None)
    }
}

/// Guess the Swagger type of a single observed string value.
pub fn guess_type(value: &str) -> GuessedType {
    if is_numeric_literal(value) {
        return if value.contains('.') {
            GuessedType::new("number", None)
        } else {
            GuessedType::new("integer", None)
        };
    }

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return GuessedType::new("boolean", None);
    }

    if is_calendar_value(value) {
        let format = if value.contains(':') { "date-time" } else { "date" };
        return GuessedType::new("string", Some(format));
    }

    GuessedType::string()
}

fn is_numeric_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(value);
    // f64 parsing alone would also accept "inf" and "NaN".
    unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && value.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

fn is_calendar_value(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
        || DATE_TIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}
