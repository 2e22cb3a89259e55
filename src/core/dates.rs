// Lenient date handling for backend timestamp strings.
//
// The table API stores dates as plain strings and never validates them,
// so every parse here returns Option rather than an error. Callers skip
// records whose dates do not parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a backend timestamp string.
///
/// Accepts RFC 3339 (`2026-03-10T09:30:00Z`, offsets allowed), a bare
/// `YYYY-MM-DDTHH:MM:SS` (assumed UTC), or a date-only `YYYY-MM-DD`
/// (midnight UTC). Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    None
}

/// True when both instants fall on the same UTC calendar day.
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Format a due date for alert messages, e.g. "Jan 1, 2020".
pub fn format_due_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepted_formats() {
        assert_eq!(
            parse_timestamp("2026-03-10T09:30:00Z"),
            Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).single()
        );
        // Offset is normalized to UTC
        assert_eq!(
            parse_timestamp("2026-03-10T09:30:00+02:00"),
            Utc.with_ymd_and_hms(2026, 3, 10, 7, 30, 0).single()
        );
        assert_eq!(
            parse_timestamp("2026-03-10T09:30:00"),
            Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).single()
        );
        assert_eq!(
            parse_timestamp("2020-01-01"),
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single()
        );
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("not-a-date"), None);
        assert_eq!(parse_timestamp("2026-13-40"), None);
        assert_eq!(parse_timestamp("03/10/2026"), None);
    }

    #[test]
    fn test_same_day_boundaries() {
        let morning = Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 1).unwrap();
        let night = Utc.with_ymd_and_hms(2026, 3, 10, 23, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2026, 3, 11, 0, 0, 0).unwrap();
        assert!(same_day(morning, night));
        assert!(!same_day(night, next));
    }

    #[test]
    fn test_format_due_date() {
        let dt = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_due_date(dt), "Jan 1, 2020");
        let dt = Utc.with_ymd_and_hms(2026, 11, 23, 12, 0, 0).unwrap();
        assert_eq!(format_due_date(dt), "Nov 23, 2026");
    }
}
