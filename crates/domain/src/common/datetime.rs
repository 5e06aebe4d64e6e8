//! DateTime parsing and display utilities with consistent error handling.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// 2015-03-26 00:00:00 UTC, the game's launch day.
///
/// Any numeric cell at or past this value is an epoch timestamp, not a stat.
pub const EPOCH_TIMESTAMP_FLOOR: i64 = 1_427_328_000;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a timestamp string, returning an error if parsing fails.
///
/// RFC3339 strings keep their offset (converted to UTC); naive ISO strings
/// are taken to already be UTC.
///
/// # Examples
///
/// ```
/// use ffrkdb_domain::common::parse_datetime;
/// use chrono::Datelike;
///
/// let dt = parse_datetime("2015-05-20T10:30:00+00:00").unwrap();
/// assert_eq!(dt.year(), 2015);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string matches none of the formats.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let trimmed = s.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(|naive| naive.and_utc())
            .ok_or(rfc_err),
    }
}

/// Converts epoch seconds to a UTC timestamp.
pub fn from_epoch_seconds(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

/// Long localized form, e.g. `Thursday, March 26, 2015 12:00 AM UTC`.
pub fn format_long(dt: &DateTime<Utc>) -> String {
    dt.format("%A, %B %-d, %Y %-I:%M %p UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_datetime_rfc3339() {
        let dt = parse_datetime("2015-06-01T10:30:00+05:00").unwrap();
        // Should be converted to UTC
        assert_eq!(dt.hour(), 5);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_naive_is_utc() {
        let dt = parse_datetime("2015-06-01 10:30:00").unwrap();
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 10);
        let dt = parse_datetime("2015-06-01T10:30:00.250").unwrap();
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-date").is_err());
        assert!(parse_datetime("").is_err());
        assert!(parse_datetime("2015-06-01").is_err()); // Missing time component
    }

    #[test]
    fn test_epoch_floor_is_launch_day() {
        let launch = from_epoch_seconds(EPOCH_TIMESTAMP_FLOOR).unwrap();
        assert_eq!((launch.year(), launch.month(), launch.day()), (2015, 3, 26));
    }

    #[test]
    fn test_format_long() {
        let dt = Utc.with_ymd_and_hms(2015, 3, 26, 0, 0, 0).unwrap();
        assert_eq!(format_long(&dt), "Thursday, March 26, 2015 12:00 AM UTC");
        let dt = Utc.with_ymd_and_hms(2016, 1, 21, 15, 5, 0).unwrap();
        assert_eq!(format_long(&dt), "Thursday, January 21, 2016 3:05 PM UTC");
    }
}
