//! Staleness predicate for resource timestamps.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use tracing::warn;

/// Resources untouched for longer than this many hours are eligible for
/// deletion, unless the window is overridden.
pub const DEFAULT_STALE_AFTER_HOURS: i64 = 24;

/// Report whether `timestamp` is older than `now - window`.
///
/// Two formats are accepted, tried in order: the fractional-seconds form
/// with a literal trailing `Z` (`2020-01-01T00:00:00.000Z`, the compute
/// surface's shape) and full ISO-8601 with an explicit offset (the other
/// surfaces). Both are compared on a UTC basis. A timestamp that parses as
/// neither is treated as not stale: we never delete what we cannot date.
pub fn is_stale_at(timestamp: &str, now: DateTime<Utc>, window: TimeDelta) -> bool {
    let Some(parsed) = parse_timestamp(timestamp) else {
        warn!(event = "core.sweep.unparseable_timestamp", timestamp = timestamp);
        return false;
    };

    parsed < now - window
}

/// [`is_stale_at`] against the current wall clock and the default window.
pub fn is_stale(timestamp: &str) -> bool {
    is_stale_at(
        timestamp,
        Utc::now(),
        TimeDelta::hours(DEFAULT_STALE_AFTER_HOURS),
    )
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.fZ") {
        // The trailing Z marks UTC; and_utc() is the normalization, not a guess
        return Some(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2020-01-03T00:00:00+00:00")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn window() -> TimeDelta {
        TimeDelta::hours(DEFAULT_STALE_AFTER_HOURS)
    }

    #[test]
    fn test_one_second_past_the_window_is_stale() {
        assert!(is_stale_at("2020-01-01T23:59:59.000Z", now(), window()));
    }

    #[test]
    fn test_just_inside_the_window_is_not_stale() {
        // 23h59m old
        assert!(!is_stale_at("2020-01-02T00:01:00.000Z", now(), window()));
    }

    #[test]
    fn test_future_timestamp_is_not_stale() {
        assert!(!is_stale_at("2020-01-05T00:00:00.000Z", now(), window()));
    }

    #[test]
    fn test_offset_format_is_accepted() {
        assert!(is_stale_at("2020-01-01T00:00:00+00:00", now(), window()));
        assert!(!is_stale_at("2020-01-02T12:00:00+00:00", now(), window()));
    }

    #[test]
    fn test_offset_is_normalized_to_utc() {
        // 2020-01-02T02:00:00+02:00 is 2020-01-02T00:00:00Z, exactly at the
        // window boundary, so not strictly older.
        assert!(!is_stale_at("2020-01-02T02:00:00+02:00", now(), window()));
        // One second earlier crosses it.
        assert!(is_stale_at("2020-01-02T01:59:59+02:00", now(), window()));
    }

    #[test]
    fn test_garbage_is_not_stale() {
        assert!(!is_stale_at("yesterday", now(), window()));
        assert!(!is_stale_at("", now(), window()));
    }

    #[test]
    fn test_custom_window() {
        let two_days = TimeDelta::hours(48);
        assert!(!is_stale_at("2020-01-01T23:59:59.000Z", now(), two_days));
        assert!(is_stale_at("2019-12-31T00:00:00.000Z", now(), two_days));
    }
}
