//! Wall-clock access and server time parsing.
//!
//! Whether a post is still a plan or already a review is decided on the
//! client by comparing its scheduled time with "now", so both sides of that
//! comparison live here.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::types::Timestamp;

/// Offset the API uses for timestamps that carry no zone (UTC+09:00).
pub const SERVER_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Zone-less layouts the API has been seen to emit, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Reads the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// Always returns the same instant. Used by tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

fn server_offset() -> FixedOffset {
    FixedOffset::east_opt(SERVER_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse a timestamp string as returned by the API.
///
/// Accepts RFC 3339 (any offset) or one of the zone-less layouts, which are
/// read in the server offset. Returns `None` for anything else.
pub fn parse_server_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| server_offset().from_local_datetime(&naive).single())
        .map(|local| local.with_timezone(&Utc))
}

/// `true` when `raw` parses and lies strictly after `now`.
///
/// Unparseable or empty times are treated as already past.
pub fn is_after(raw: &str, now: Timestamp) -> bool {
    parse_server_time(raw).is_some_and(|at| at > now)
}

/// Calendar day of `raw` as seen in the server offset.
pub fn server_date(raw: &str) -> Option<NaiveDate> {
    parse_server_time(raw).map(|at| at.with_timezone(&server_offset()).date_naive())
}

/// Calendar day of `now` as seen in the server offset.
pub fn server_today(now: Timestamp) -> NaiveDate {
    now.with_timezone(&server_offset()).date_naive()
}

/// `yyyy-MM` month key of `now` in the server offset.
pub fn server_month(now: Timestamp) -> String {
    server_today(now).format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn naive_times_are_read_in_server_offset() {
        let parsed = parse_server_time("2024-05-01 18:30:00").unwrap();
        assert_eq!(parsed, utc(2024, 5, 1, 9, 30));

        let parsed = parse_server_time("2024-05-01T18:30").unwrap();
        assert_eq!(parsed, utc(2024, 5, 1, 9, 30));
    }

    #[test]
    fn rfc3339_keeps_its_own_offset() {
        let parsed = parse_server_time("2024-05-01T18:30:00Z").unwrap();
        assert_eq!(parsed, utc(2024, 5, 1, 18, 30));
    }

    #[test]
    fn garbage_and_empty_do_not_parse() {
        assert!(parse_server_time("").is_none());
        assert!(parse_server_time("tomorrow").is_none());
    }

    #[test]
    fn is_after_compares_strictly() {
        let now = utc(2024, 5, 1, 9, 30);
        assert!(is_after("2024-05-01 18:31:00", now));
        assert!(!is_after("2024-05-01 18:30:00", now));
        assert!(!is_after("not a date", now));
    }

    #[test]
    fn dates_and_months_follow_server_offset() {
        // 16:00 UTC is already the next day at UTC+9.
        assert_eq!(
            server_date("2024-05-31T16:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            server_date("2024-05-31 23:00:00"),
            NaiveDate::from_ymd_opt(2024, 5, 31)
        );
        assert_eq!(server_month(utc(2024, 5, 31, 16, 0)), "2024-06");
    }

    #[test]
    fn fixed_clock_returns_its_instant() {
        let at = utc(2030, 1, 1, 0, 0);
        assert_eq!(FixedClock(at).now(), at);
    }
}
