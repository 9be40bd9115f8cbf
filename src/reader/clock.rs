//! Clock capsule formatting
//!
//! The status capsule shows a 24h time and a short date, refreshed by a
//! one-second JS interval. The interval lives in the shell and must be
//! cleared on teardown; this side only formats, idempotently, from
//! whatever instant it is handed.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

/// A formatted clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockStamp {
    /// "HH:MM:SS", 24-hour
    pub time: String,
    /// "Www dd Mon", e.g. "Tue 25 Aug"
    pub date: String,
}

impl ClockStamp {
    /// Format a stamp from an explicit instant.
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            time: instant.format("%H:%M:%S").to_string(),
            date: instant.format("%a %d %b").to_string(),
        }
    }

    /// Format a stamp for the current local time.
    pub fn now() -> Self {
        Self::at(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_stamp_formatting() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap();
        let stamp = ClockStamp::at(&instant);
        assert_eq!(stamp.time, "07:05:42");
        assert_eq!(stamp.date, "Sat 09 Mar");
    }

    #[test]
    fn test_stamp_is_idempotent_for_same_instant() {
        let instant = Utc.with_ymd_and_hms(2021, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ClockStamp::at(&instant), ClockStamp::at(&instant));
    }
}
