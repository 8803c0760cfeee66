//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{ClockTime, DepartureRecord, DepartureSpec};
use crate::register::{BoardStatus, FieldEdit};

/// Longest line code the board accepts.
pub const MAX_LINE_CHARS: usize = 4;

/// A delay must be shorter than a full day.
pub const MAX_DELAY_MINUTES: i32 = 24 * 60 - 1;

/// Request to register a departure.
#[derive(Debug, Deserialize)]
pub struct AddDepartureRequest {
    /// Scheduled departure time, "HH:MM"
    pub departure_time: String,

    /// Train number, unique for the day
    pub train_number: i64,

    /// Line code (e.g., "L4")
    pub line: String,

    /// Destination name
    pub destination: String,

    /// Delay in minutes
    #[serde(default)]
    pub delay_minutes: Option<i32>,

    /// Track number; absent means not yet assigned
    #[serde(default)]
    pub track: Option<i64>,
}

impl AddDepartureRequest {
    /// Check the request and build a spec for the register.
    ///
    /// The departure time is parsed here so a malformed time is reported
    /// before the register is locked.
    pub fn into_spec(self) -> Result<DepartureSpec, String> {
        validate_train_number(self.train_number)?;
        validate_line(&self.line)?;
        validate_destination(&self.destination)?;
        let delay_minutes = self.delay_minutes.unwrap_or(0);
        validate_delay(delay_minutes)?;
        let departure_time =
            ClockTime::parse_hhmm(self.departure_time.trim()).map_err(|e| e.to_string())?;

        Ok(DepartureSpec {
            delay_minutes,
            track: self
                .track
                .map(crate::domain::Track::from_raw)
                .unwrap_or_default(),
            ..DepartureSpec::new(
                departure_time,
                self.train_number,
                self.line,
                self.destination,
            )
        })
    }
}

/// Request to change one field of a departure.
///
/// Serialized as `{"field": "delay", "value": 10}`.
#[derive(Debug, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EditRequest {
    DepartureTime(String),
    Line(Option<String>),
    TrainNumber(i64),
    Destination(Option<String>),
    Delay(i32),
    Track(i64),
}

impl EditRequest {
    /// Check the new value and convert to a register edit.
    ///
    /// A null line or destination is passed through; the register stores it
    /// as "INVALID".
    pub fn into_edit(self) -> Result<FieldEdit, String> {
        Ok(match self {
            EditRequest::DepartureTime(time) => FieldEdit::DepartureTime(time.trim().to_string()),
            EditRequest::Line(line) => {
                if let Some(line) = &line {
                    validate_line(line)?;
                }
                FieldEdit::Line(line)
            }
            EditRequest::TrainNumber(n) => {
                validate_train_number(n)?;
                FieldEdit::TrainNumber(n)
            }
            EditRequest::Destination(name) => {
                if let Some(name) = &name {
                    validate_destination(name)?;
                }
                FieldEdit::Destination(name)
            }
            EditRequest::Delay(minutes) => {
                validate_delay(minutes)?;
                FieldEdit::Delay(minutes)
            }
            EditRequest::Track(track) => FieldEdit::Track(track),
        })
    }
}

/// Request to move the station clock.
#[derive(Debug, Deserialize)]
pub struct ClockRequest {
    /// New clock reading, "HH:MM"
    pub time: String,
}

/// Query for the departure list.
#[derive(Debug, Default, Deserialize)]
pub struct DeparturesQuery {
    /// Include departures that have already left
    #[serde(default)]
    pub all: bool,
}

/// Query for a destination search.
#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    pub destination: String,
}

/// A departure in API responses.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Scheduled departure time
    pub departure_time: String,

    /// Scheduled time plus delay
    pub real_departure_time: String,

    pub train_number: u32,
    pub line: String,
    pub destination: String,
    pub delay_minutes: u32,

    /// Track number, if assigned
    pub track: Option<u32>,

    /// Whether the train left before the station clock
    pub departed: bool,
}

/// A list of departures with the clock it was taken at.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub clock: String,
    pub departures: Vec<DepartureResult>,
}

/// Station clock and departure count.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub clock: String,
    pub departures_today: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl DepartureResult {
    /// Create from a departure record, as seen at the given clock time.
    pub fn from_record(record: &DepartureRecord, clock: ClockTime) -> Self {
        Self {
            departure_time: record.departure_time().to_string(),
            real_departure_time: record.real_departure_time().to_string(),
            train_number: record.train_number().get(),
            line: record.line().to_string(),
            destination: record.destination().to_string(),
            delay_minutes: record.delay_minutes(),
            track: record.track().number(),
            departed: record.has_departed(clock),
        }
    }
}

impl DeparturesResponse {
    pub fn from_records(records: &[DepartureRecord], clock: ClockTime) -> Self {
        Self {
            clock: clock.to_string(),
            departures: records
                .iter()
                .map(|r| DepartureResult::from_record(r, clock))
                .collect(),
        }
    }
}

impl StatusResponse {
    pub fn from_status(status: BoardStatus) -> Self {
        Self {
            clock: status.clock.to_string(),
            departures_today: status.departures_today,
        }
    }
}

// Validation

fn validate_train_number(n: i64) -> Result<(), String> {
    if n > 0 {
        Ok(())
    } else {
        Err(format!("train number must be a positive number, got {n}"))
    }
}

fn validate_line(line: &str) -> Result<(), String> {
    let line = line.trim();
    if line.is_empty() {
        return Err("line must not be empty".to_string());
    }
    if line.chars().count() > MAX_LINE_CHARS || !line.chars().all(char::is_alphanumeric) {
        return Err(format!(
            "line must be at most {MAX_LINE_CHARS} letters or digits, got {line:?}"
        ));
    }
    Ok(())
}

fn validate_destination(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        Err("destination must not be empty".to_string())
    } else {
        Ok(())
    }
}

fn validate_delay(minutes: i32) -> Result<(), String> {
    if (0..=MAX_DELAY_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(format!(
            "delay must be between 0 and {MAX_DELAY_MINUTES} minutes, got {minutes}"
        ))
    }
}
