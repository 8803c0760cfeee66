//! Station time handling.
//!
//! Departures and the station clock are given as "HH:MM" strings. This
//! module provides a minute-resolution time on the service day that can
//! run past midnight when a delay pushes a departure into the next day.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;
use std::ops::Add;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Why the input was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A time on the station's service day, to the minute.
///
/// Parsed times always lie within the day (00:00 to 23:59). Adding a delay
/// may carry a time past midnight; the day offset then counts the
/// midnights crossed, so ordering stays chronological and a delayed time is
/// never earlier than the scheduled one. The displayed form wraps back to
/// "HH:MM".
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use departure_board::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("23:30").unwrap();
/// assert_eq!(time.to_string(), "23:30");
///
/// let later = time + Duration::minutes(45);
/// assert_eq!(later.to_string(), "00:15");
/// assert_eq!(later.day_offset(), 1);
/// assert!(later > time);
/// ```
// Field order matters: the derived ordering compares the day first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    day_offset: u32,
    time: NaiveTime,
}

impl ClockTime {
    /// The start of the service day.
    pub const MIDNIGHT: ClockTime = ClockTime {
        day_offset: 0,
        time: NaiveTime::MIN,
    };

    /// Create a time of day from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self {
            day_offset: 0,
            time,
        })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use departure_board::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("9:30").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// assert!(ClockTime::parse_hhmm("12:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the displayed hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// How many midnights lie between the start of the service day and this time.
    pub fn day_offset(&self) -> u32 {
        self.day_offset
    }
}

/// Move a time later. Negative durations leave it unchanged; the day
/// offset saturates rather than overflowing.
impl Add<Duration> for ClockTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        let (time, overflow_secs) = self.time.overflowing_add_signed(rhs.max(Duration::zero()));
        let days = u32::try_from(overflow_secs / SECONDS_PER_DAY).unwrap_or(u32::MAX);
        Self {
            day_offset: self.day_offset.saturating_add(days),
            time,
        }
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day_offset {
            0 => write!(f, "ClockTime({self})"),
            days => write!(f, "ClockTime({self} +{days}d)"),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M"))
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
