//! The station clock.

use crate::domain::{ClockTime, RegisterError};

/// Current time of day at the station.
///
/// Within a day the clock only moves forward; [`StationClock::reset`] starts
/// a new day at 00:00.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationClock {
    now: ClockTime,
}

impl StationClock {
    /// A clock reading the given time.
    pub fn starting_at(now: ClockTime) -> Self {
        Self { now }
    }

    pub fn now(&self) -> ClockTime {
        self.now
    }

    /// Whether `time` is still ahead of the clock.
    pub fn is_before(&self, time: ClockTime) -> bool {
        self.now < time
    }

    /// Move the clock forward to `time`.
    ///
    /// A time that is not strictly after the current reading is rejected and
    /// the clock is left unchanged.
    pub fn advance_to(&mut self, time: ClockTime) -> Result<ClockTime, RegisterError> {
        if !self.is_before(time) {
            return Err(RegisterError::DepartureAlreadyPassed {
                proposed: time,
                clock: self.now,
            });
        }
        self.now = time;
        Ok(time)
    }

    /// Start a new day.
    pub fn reset(&mut self) {
        self.now = ClockTime::MIDNIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn starts_at_midnight() {
        assert_eq!(StationClock::default().now(), ClockTime::MIDNIGHT);
    }

    #[test]
    fn advances_forward() {
        let mut clock = StationClock::default();
        assert_eq!(clock.advance_to(t("10:00")), Ok(t("10:00")));
        assert_eq!(clock.now(), t("10:00"));
    }

    #[test]
    fn refuses_to_rewind_or_stand_still() {
        let mut clock = StationClock::starting_at(t("10:00"));

        assert_eq!(
            clock.advance_to(t("09:59")),
            Err(RegisterError::DepartureAlreadyPassed {
                proposed: t("09:59"),
                clock: t("10:00"),
            })
        );
        assert!(clock.advance_to(t("10:00")).is_err());
        assert_eq!(clock.now(), t("10:00"));
    }

    #[test]
    fn reset_returns_to_midnight() {
        let mut clock = StationClock::starting_at(t("23:00"));
        clock.reset();
        assert_eq!(clock.now(), ClockTime::MIDNIGHT);
        assert!(clock.advance_to(t("00:01")).is_ok());
    }

    #[test]
    fn is_before_is_strict() {
        let clock = StationClock::starting_at(t("12:00"));
        assert!(clock.is_before(t("12:01")));
        assert!(!clock.is_before(t("12:00")));
        assert!(!clock.is_before(t("11:59")));
    }
}
