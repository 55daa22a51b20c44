//! Date helpers for the loosely formatted dates found in exports and API payloads.
//!
//! Every expiry check takes the evaluation time explicitly so reports can be
//! reproduced for a fixed "as of" moment.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Parse a date or timestamp string into a UTC instant.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, `YYYY-MM-DDTHH:MM:SS` (taken as UTC) and
/// `DD/MM/YYYY`. Plain dates resolve to midnight UTC of that day.
///
/// Slash dates are always read day first, as the club's exports write them,
/// so `01/05/2024` is 1 May and `25/12/2024` is a valid date. A US-order
/// reading (month first) is never attempted.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }

    ["%Y-%m-%d", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Calendar year of a date string, if it parses.
pub fn year_of(value: &str) -> Option<i32> {
    parse_date(value).map(|dt| dt.year())
}

/// True when the date lies strictly before `now`.
/// Unparseable or empty dates never count as expired.
pub fn is_expired(value: &str, now: DateTime<Utc>) -> bool {
    parse_date(value).is_some_and(|dt| dt < now)
}

/// True when the date is expired as of `now` and falls within `year`.
pub fn expired_in_year(value: &str, year: i32, now: DateTime<Utc>) -> bool {
    parse_date(value).is_some_and(|dt| dt < now && dt.year() == year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-05-01"), Some(midnight));
        assert_eq!(parse_date("01/05/2024"), Some(midnight));
        assert_eq!(parse_date("2024-05-01T00:00:00"), Some(midnight));
        assert_eq!(parse_date("2024-05-01T10:00:00+10:00"), Some(midnight));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_slash_dates_are_day_first() {
        let may_first = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let christmas = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(parse_date("01/05/2024"), Some(may_first));
        assert_eq!(parse_date("25/12/2024"), Some(christmas));
        assert_eq!(parse_date("12/25/2024"), None);
        assert!(is_expired("25/12/2024", at(2025, 1, 1)));
    }

    #[test]
    fn test_is_expired() {
        let now = at(2024, 6, 1);
        assert!(is_expired("2024-05-31", now));
        assert!(!is_expired("2024-06-02", now));
        assert!(!is_expired("", now));
        assert!(!is_expired("not a date", now));
    }

    #[test]
    fn test_expired_in_year() {
        let now = at(2024, 6, 1);
        assert!(expired_in_year("2024-01-15", 2024, now));
        assert!(!expired_in_year("2023-01-15", 2024, now)); // expired, wrong year
        assert!(!expired_in_year("2024-12-15", 2024, now)); // right year, still current
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2017-03-04"), Some(2017));
        assert_eq!(year_of(""), None);
    }
}
