//! Single-field edits of a registered departure.

use crate::domain::Field;

/// A new value for one field of a departure.
///
/// Each variant carries the raw input; the register applies the same
/// validation as the record setters, plus its own checks for the departure
/// time and train number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// "HH:MM", must be after the station clock
    DepartureTime(String),
    Line(Option<String>),
    /// Must be positive and not used by another departure
    TrainNumber(i64),
    Destination(Option<String>),
    /// Minutes; zero or negative clears the delay
    Delay(i32),
    /// Zero or negative unassigns the track
    Track(i64),
}

impl FieldEdit {
    /// The field this edit changes.
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::DepartureTime(_) => Field::DepartureTime,
            FieldEdit::Line(_) => Field::Line,
            FieldEdit::TrainNumber(_) => Field::TrainNumber,
            FieldEdit::Destination(_) => Field::Destination,
            FieldEdit::Delay(_) => Field::Delay,
            FieldEdit::Track(_) => Field::Track,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_of_each_edit() {
        assert_eq!(
            FieldEdit::DepartureTime("10:00".into()).field(),
            Field::DepartureTime
        );
        assert_eq!(FieldEdit::Line(None).field(), Field::Line);
        assert_eq!(FieldEdit::TrainNumber(4).field(), Field::TrainNumber);
        assert_eq!(FieldEdit::Destination(None).field(), Field::Destination);
        assert_eq!(FieldEdit::Delay(5).field(), Field::Delay);
        assert_eq!(FieldEdit::Track(2).field(), Field::Track);
    }
}
