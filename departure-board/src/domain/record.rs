//! Departure record type.

use chrono::Duration;

use super::error::{Field, RegisterError};
use super::text::{normalize_destination, normalize_line};
use super::time::{ClockTime, TimeError};
use super::{TrainNumber, Track};

/// Everything needed to register a departure.
///
/// The four scheduling fields are required; delay and track default to none
/// and unassigned.
///
/// # Examples
///
/// ```
/// use departure_board::domain::{ClockTime, DepartureRecord, DepartureSpec, Track};
///
/// let spec = DepartureSpec {
///     delay_minutes: 10,
///     track: Track::from_raw(2),
///     ..DepartureSpec::new(ClockTime::parse_hhmm("12:45").unwrap(), 63, "l4", "oslo")
/// };
/// let record = DepartureRecord::new(spec).unwrap();
/// assert_eq!(record.line(), "L4");
/// assert_eq!(record.real_departure_time().to_string(), "12:55");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureSpec {
    pub departure_time: ClockTime,
    pub train_number: i64,
    pub line: String,
    pub destination: String,
    pub delay_minutes: i32,
    pub track: Track,
}

impl DepartureSpec {
    /// A spec with the required fields and no delay or track.
    pub fn new(
        departure_time: ClockTime,
        train_number: i64,
        line: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            departure_time,
            train_number,
            line: line.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }
}

/// One train's departure from the station and its current state.
///
/// The line is stored uppercased and the destination capitalized; see
/// [`normalize_line`] and [`normalize_destination`]. The delay is never
/// negative, so the real departure time is never earlier than the
/// scheduled one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRecord {
    departure_time: ClockTime,
    train_number: TrainNumber,
    line: String,
    destination: String,
    delay_minutes: u32,
    track: Track,
}

impl DepartureRecord {
    /// Create a record, rejecting a train number that is not positive.
    pub fn new(spec: DepartureSpec) -> Result<Self, RegisterError> {
        let train_number = positive_train_number(spec.train_number)?;
        let mut record = Self {
            departure_time: spec.departure_time,
            train_number,
            line: normalize_line(Some(&spec.line)),
            destination: normalize_destination(Some(&spec.destination)),
            delay_minutes: 0,
            track: spec.track,
        };
        record.set_delay(spec.delay_minutes);
        Ok(record)
    }

    /// Create a record from a "HH:MM" departure time and the required fields.
    pub fn create(
        departure_time: &str,
        train_number: i64,
        line: &str,
        destination: &str,
    ) -> Result<Self, RegisterError> {
        let departure_time = ClockTime::parse_hhmm(departure_time)?;
        Self::new(DepartureSpec::new(
            departure_time,
            train_number,
            line,
            destination,
        ))
    }

    pub fn departure_time(&self) -> ClockTime {
        self.departure_time
    }

    pub fn train_number(&self) -> TrainNumber {
        self.train_number
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn delay_minutes(&self) -> u32 {
        self.delay_minutes
    }

    /// The delay as a duration.
    pub fn delay(&self) -> Duration {
        Duration::minutes(i64::from(self.delay_minutes))
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Scheduled departure time plus delay.
    pub fn real_departure_time(&self) -> ClockTime {
        self.departure_time + self.delay()
    }

    /// Whether the train has left by the given station time.
    pub fn has_departed(&self, clock: ClockTime) -> bool {
        self.real_departure_time() < clock
    }

    /// Set the delay in minutes; zero or negative clears it.
    ///
    /// The delay replaces any previous delay rather than adding to it.
    pub fn set_delay(&mut self, minutes: i32) {
        self.delay_minutes = u32::try_from(minutes).unwrap_or(0);
    }

    /// Set the departure time from "HH:MM".
    ///
    /// A malformed or out-of-range time resets the departure time to 00:00
    /// and returns the parse error.
    pub fn set_departure_time(&mut self, time: &str) -> Result<(), TimeError> {
        match ClockTime::parse_hhmm(time) {
            Ok(time) => {
                self.departure_time = time;
                Ok(())
            }
            Err(e) => {
                self.departure_time = ClockTime::MIDNIGHT;
                Err(e)
            }
        }
    }

    /// Move the departure to an already validated time.
    pub fn reschedule(&mut self, time: ClockTime) {
        self.departure_time = time;
    }

    pub fn set_line(&mut self, code: Option<&str>) {
        self.line = normalize_line(code);
    }

    pub fn set_destination(&mut self, name: Option<&str>) {
        self.destination = normalize_destination(name);
    }

    /// Change the train number; a number that is not positive is rejected and
    /// the current number kept.
    pub fn set_train_number(&mut self, n: i64) -> Result<(), RegisterError> {
        self.renumber(positive_train_number(n)?);
        Ok(())
    }

    /// Change to an already validated train number.
    pub fn renumber(&mut self, train_number: TrainNumber) {
        self.train_number = train_number;
    }

    /// Assign a track; zero or negative marks the track unassigned.
    pub fn set_track(&mut self, n: i64) {
        self.track = Track::from_raw(n);
    }
}

fn positive_train_number(n: i64) -> Result<TrainNumber, RegisterError> {
    TrainNumber::new(n).ok_or(RegisterError::InvalidFieldValue {
        field: Field::TrainNumber,
        value: n,
    })
}
