//! Station departure board.
//!
//! Keeps one station's departures for the current day, ordered by departure
//! time, and shows the ones that have not yet left against a station clock
//! that only moves forward.

pub mod config;
pub mod domain;
pub mod register;
pub mod web;
