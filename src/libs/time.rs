//! Clock-time helpers shared by the layout engine.
//!
//! Time entries arrive with second precision (`HH:MM:SS`) but the timesheet
//! prints whole minutes. [`round_to_minute`] applies the report's rounding
//! policy: more than thirty seconds round up, anything else truncates, and
//! the last minute of the day is pinned so it never wraps to midnight.

use chrono::{Duration, NaiveTime, Timelike};

/// Text pattern used by time-entry exports for clock times.
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Parses an `HH:MM:SS` clock time.
pub fn parse_clock(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT)
}

/// Rounds a clock time to the minute.
///
/// `23:59:xx` always yields `23:59` because the entry date is not advanced
/// alongside the time.
pub fn round_to_minute(time: NaiveTime) -> NaiveTime {
    let truncated = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);

    if time.hour() == 23 && time.minute() == 59 {
        return truncated;
    }

    if time.second() > 30 {
        truncated + Duration::minutes(1)
    } else {
        truncated
    }
}

/// Signed span between two clock times; negative when `end` precedes `start`.
pub fn duration(start: NaiveTime, end: NaiveTime) -> Duration {
    end.signed_duration_since(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn rounds_up_after_thirty_seconds() {
        assert_eq!(round_to_minute(t(17, 30, 40)), t(17, 31, 0));
        assert_eq!(round_to_minute(t(8, 59, 31)), t(9, 0, 0));
    }

    #[test]
    fn truncates_up_to_thirty_seconds() {
        assert_eq!(round_to_minute(t(9, 0, 5)), t(9, 0, 0));
        assert_eq!(round_to_minute(t(9, 0, 30)), t(9, 0, 0));
    }

    #[test]
    fn last_minute_never_wraps() {
        assert_eq!(round_to_minute(t(23, 59, 45)), t(23, 59, 0));
        assert_eq!(round_to_minute(t(23, 59, 0)), t(23, 59, 0));
        assert_eq!(round_to_minute(t(23, 58, 59)), t(23, 59, 0));
    }

    #[test]
    fn rounding_is_idempotent() {
        for time in [t(0, 0, 0), t(12, 34, 31), t(23, 59, 59), t(6, 7, 30)] {
            let once = round_to_minute(time);
            assert_eq!(round_to_minute(once), once);
        }
    }

    #[test]
    fn duration_can_be_negative() {
        assert_eq!(duration(t(9, 0, 0), t(17, 31, 0)), Duration::minutes(8 * 60 + 31));
        assert_eq!(duration(t(18, 0, 0), t(17, 0, 0)), Duration::minutes(-60));
    }

    #[test]
    fn parses_clock_text() {
        assert_eq!(parse_clock("09:00:05").unwrap(), t(9, 0, 5));
        assert!(parse_clock("9am").is_err());
    }
}
