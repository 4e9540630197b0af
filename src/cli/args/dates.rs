//! Date arguments for `--modified-after` style filters

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{Error, Result};

/// Parse a date argument into an instant.
///
/// Supports:
/// - Relative: "7d" (7 days ago), "1w" (1 week ago), "12h" (12 hours ago)
/// - ISO date: "2024-01-15" (midnight UTC)
/// - ISO datetime: "2024-01-15T10:30:00Z", or without offset (UTC)
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    parse_instant_at(value, Utc::now())
}

fn parse_instant_at(value: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let value = value.trim();

    let relative = [
        ('d', Duration::days(1)),
        ('w', Duration::weeks(1)),
        ('h', Duration::hours(1)),
    ];
    for (suffix, unit) in relative {
        if let Some(count) = value.strip_suffix(suffix)
            && let Ok(count) = count.parse::<i32>()
        {
            return Ok(now - unit * count);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }

    Err(Error::Other(format!(
        "Invalid date format: '{}'. Use relative (7d, 1w, 12h) or ISO format (YYYY-MM-DD)",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_relative_units() {
        assert_eq!(
            parse_instant_at("7d", now()).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap()
        );
        assert_eq!(
            parse_instant_at("2w", now()).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(
            parse_instant_at("36h", now()).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 14, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_iso_forms() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_instant_at("2024-01-15", now()).unwrap(), midnight);

        let half_past = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(parse_instant_at("2024-01-15T10:30:00Z", now()).unwrap(), half_past);
        assert_eq!(parse_instant_at("2024-01-15T20:30:00+10:00", now()).unwrap(), half_past);
        assert_eq!(parse_instant_at("2024-01-15T10:30:00", now()).unwrap(), half_past);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(parse_instant("soon"), Err(Error::Other(_))));
        assert!(parse_instant("d").is_err());
        assert!(parse_instant("2024-13-01").is_err());
    }
}
