//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::register::DepartureRegister;

/// Shared application state.
///
/// The register is not internally synchronized; every handler holds the
/// lock for the whole register operation it performs.
#[derive(Clone)]
pub struct AppState {
    /// The station's departure register
    pub register: Arc<RwLock<DepartureRegister>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(register: DepartureRegister) -> Self {
        Self {
            register: Arc::new(RwLock::new(register)),
        }
    }
}
