//! Strict date and datetime parsing.
//!
//! Date fields travel as `YYYY-MM-DD` strings, datetime fields as
//! `YYYY-MM-DD HH:MM:SS`. Parsing is strict: the separators and zero-padded
//! widths are required, so `2024/01/01` and `2024-1-1` both fail even though
//! a lenient parser would take them.
//!
//! An absent date is represented at the wire boundary by the sentinel
//! `0000-00-00` (stored as SQL NULL). The sentinel is not itself a valid
//! date and never parses.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Sentinel for an absent date.
pub const ABSENT_DATE: &str = "0000-00-00";

/// Sentinel for an absent datetime.
pub const ABSENT_DATETIME: &str = "0000-00-00 00:00:00";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Failure to parse a temporal value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date format. Expected YYYY-MM-DD.")]
    InvalidDate,

    #[error("Invalid datetime format. Expected YYYY-MM-DD HH:MM:SS.")]
    InvalidDatetime,
}

/// Shape check: chrono's numeric specifiers accept unpadded digits, so the
/// exact width and separator positions are enforced up front.
fn has_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, &c)| match i {
            4 | 7 => c == b'-',
            _ => c.is_ascii_digit(),
        })
}

fn has_datetime_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 19
        && b.iter().enumerate().all(|(i, &c)| match i {
            4 | 7 => c == b'-',
            10 => c == b' ',
            13 | 16 => c == b':',
            _ => c.is_ascii_digit(),
        })
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`DateError::InvalidDate`] when the string does not match the
/// format exactly or does not name a real calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    if !has_date_shape(s) {
        return Err(DateError::InvalidDate);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateError::InvalidDate)
}

/// Parse a strict `YYYY-MM-DD HH:MM:SS` datetime.
///
/// # Errors
///
/// Returns [`DateError::InvalidDatetime`] when the string does not match the
/// format exactly or does not name a real point in time.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, DateError> {
    if !has_datetime_shape(s) {
        return Err(DateError::InvalidDatetime);
    }
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).map_err(|_| DateError::InvalidDatetime)
}

/// Format a date into the wire form.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a datetime into the wire form.
#[must_use]
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dates() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date("1999-12-31").unwrap(),
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()
        );
        // Leap day
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn test_parse_rejects_wrong_separators_and_padding() {
        assert!(parse_date("2024/01/01").is_err());
        assert!(parse_date("Jan 1 2024").is_err());
        assert!(parse_date("2024-1-1").is_err());
        assert!(parse_date("24-01-01").is_err());
        assert!(parse_date("2024-01-01 ").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-00-10").is_err());
    }

    #[test]
    fn test_sentinel_is_not_a_date() {
        assert!(parse_date(ABSENT_DATE).is_err());
        assert!(parse_datetime(ABSENT_DATETIME).is_err());
    }

    #[test]
    fn test_date_roundtrip() {
        for s in ["2024-01-01", "2000-02-29", "1970-12-31"] {
            assert_eq!(format_date(parse_date(s).unwrap()), s);
        }
    }

    #[test]
    fn test_parse_valid_datetimes() {
        let dt = parse_datetime("2024-06-15 08:30:00").unwrap();
        assert_eq!(format_datetime(dt), "2024-06-15 08:30:00");
    }

    #[test]
    fn test_parse_rejects_malformed_datetimes() {
        assert!(parse_datetime("2024-06-15T08:30:00").is_err());
        assert!(parse_datetime("2024-06-15 8:30:00").is_err());
        assert!(parse_datetime("2024-06-15 08:30").is_err());
        assert!(parse_datetime("2024-06-15 25:00:00").is_err());
        assert!(parse_datetime("2024-06-15").is_err());
    }
}
