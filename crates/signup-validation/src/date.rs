//! Date validation functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the text a date input produces.
///
/// Accepts a calendar date (`2024-02-12`), a local date-time
/// (`2024-02-12T08:30` or with seconds) and an RFC 3339 timestamp. Only the
/// calendar date is kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

pub fn is_valid_date(raw: &str) -> bool {
    parse_date(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date() {
        assert_eq!(parse_date("2024-02-12"), NaiveDate::from_ymd_opt(2024, 2, 12));
        assert_eq!(parse_date("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_datetime_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 12);
        assert_eq!(parse_date("2024-02-12T08:30"), expected);
        assert_eq!(parse_date("2024-02-12T08:30:15"), expected);
        assert_eq!(parse_date("2024-02-12T08:30:15Z"), expected);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("not a date"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-13-01"));
    }
}
