//! The station's departure register.
//!
//! [`DepartureRegister`] owns the day's departures and the station clock,
//! keeps departures in board order, and answers the board's queries.

mod clock;
mod demo;
mod departures;
mod edit;


pub use clock::StationClock;
pub use demo::seed_demo_departures;
pub use departures::{BoardStatus, DepartureRegister};
pub use edit::FieldEdit;
