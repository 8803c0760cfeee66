//! Domain types for the departure board.
//!
//! These types represent validated departure data. They enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod record;
mod text;
mod time;
mod track;
mod train_number;

pub use error::{Field, RegisterError};
pub use record::{DepartureRecord, DepartureSpec};
pub use text::{INVALID, MAX_DESTINATION_CHARS, normalize_destination, normalize_line};
pub use time::{ClockTime, TimeError};
pub use track::Track;
pub use train_number::TrainNumber;
