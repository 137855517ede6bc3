//! Parsing of the date strings the issue tracker emits.

use chrono::{DateTime, NaiveDate, Utc};

/// Parses a tracker date into UTC.
///
/// Accepts RFC 3339 (`2024-01-08T09:00:00.000Z`), the tracker's offset form
/// without a colon (`2024-01-08T09:00:00.000+0100`) and bare dates
/// (`2024-01-08`, read as midnight UTC). Anything else yields None.
pub fn parse_tracker_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_tracker_date("2024-01-08T09:00:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_offset_without_colon() {
        let parsed = parse_tracker_date("2024-01-08T10:00:00.000+0100").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let parsed = parse_tracker_date("2024-02-29").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_tracker_date("").is_none());
        assert!(parse_tracker_date("next tuesday").is_none());
    }
}
