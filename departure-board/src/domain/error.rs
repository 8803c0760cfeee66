//! Register error types.
//!
//! These errors are validation failures: the operation that returns one has
//! left the register exactly as it was.

use std::fmt;

use super::{ClockTime, TimeError, TrainNumber};

/// An editable field of a departure record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DepartureTime,
    Line,
    TrainNumber,
    Destination,
    Delay,
    Track,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::DepartureTime => "departure time",
            Field::Line => "line",
            Field::TrainNumber => "train number",
            Field::Destination => "destination",
            Field::Delay => "delay",
            Field::Track => "track",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a register operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// Another departure already uses this train number
    #[error("train number {0} is already in use today")]
    DuplicateTrainNumber(TrainNumber),

    /// The proposed time is not after the station clock
    #[error("{proposed} has already passed (station clock is {clock})")]
    DepartureAlreadyPassed { proposed: ClockTime, clock: ClockTime },

    /// Malformed "HH:MM" or out-of-range hour/minute
    #[error(transparent)]
    InvalidTimeFormat(#[from] TimeError),

    /// A value that must be positive was not
    #[error("{field} must be a positive number, got {value}")]
    InvalidFieldValue { field: Field, value: i64 },

    /// No departure has this train number
    #[error("no departure with train number {0}")]
    RecordNotFound(i64),
}
