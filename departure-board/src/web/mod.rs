//! Web layer for the departure board.
//!
//! Serves the board as HTML and the register operations as a JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
