// File: crates/protherm-chart/src/week.rs
// Summary: Time-of-week points (seconds since Monday 00:00) and their tick label formatting.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::fmt;

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;
/// Length of the repeating week, in seconds.
pub const SECONDS_PER_WEEK: u32 = 7 * SECONDS_PER_DAY;

/// Offset in seconds from Monday 00:00, always in `[0, SECONDS_PER_WEEK)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekTime(u32);

impl WeekTime {
    /// Monday 00:00.
    pub const START: WeekTime = WeekTime(0);

    /// Build from a weekday (0 = Monday), hour and minute. Out-of-range parts give `None`.
    pub fn from_parts(weekday: u32, hour: u32, minute: u32) -> Option<Self> {
        if weekday > 6 || hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(weekday * SECONDS_PER_DAY + hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE))
    }

    /// Parse the `"d HH:MM"` form used by program files: one weekday digit, a single
    /// space, then exactly two digits each for hour and minute.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 7 || b[1] != b' ' || b[4] != b':' {
            return None;
        }
        let digit = |i: usize| -> Option<u32> {
            let c = b[i];
            c.is_ascii_digit().then(|| (c - b'0') as u32)
        };
        let weekday = digit(0)?;
        let hour = digit(2)? * 10 + digit(3)?;
        let minute = digit(5)? * 10 + digit(6)?;
        Self::from_parts(weekday, hour, minute)
    }

    #[inline]
    pub const fn seconds(&self) -> u32 { self.0 }

    pub const fn weekday(&self) -> u32 { self.0 / SECONDS_PER_DAY }
    pub const fn hour(&self) -> u32 { (self.0 % SECONDS_PER_DAY) / SECONDS_PER_HOUR }
    pub const fn minute(&self) -> u32 { (self.0 % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE }
}

impl fmt::Display for WeekTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.weekday(), self.hour(), self.minute())
    }
}

/// 1970-01-05 was a Monday; week offsets are anchored there for calendar formatting.
fn anchor(offset_seconds: u32) -> NaiveDateTime {
    let monday = NaiveDate::from_ymd_opt(1970, 1, 5)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    monday + Duration::seconds(offset_seconds as i64)
}

/// `"HH:MM"` for a week offset. Offsets past the week wrap into the following Monday.
pub fn format_time(offset_seconds: u32) -> String {
    anchor(offset_seconds).format("%H:%M").to_string()
}

/// Two-line `"HH:MM\nDay"` label used on major ticks.
pub fn format_time_with_day(offset_seconds: u32) -> String {
    anchor(offset_seconds).format("%H:%M\n%a").to_string()
}
