//! Server configuration, read from `BOARD_*` environment variables.

use std::net::SocketAddr;

use thiserror::Error;

use crate::domain::{ClockTime, TimeError};

/// A configuration value that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOARD_ADDR must be a socket address such as 127.0.0.1:3000, got {value:?}")]
    InvalidAddr { value: String },

    #[error("BOARD_CLOCK must be an HH:MM time, got {value:?}: {source}")]
    InvalidClock { value: String, source: TimeError },

    #[error("BOARD_DEMO must be true or false, got {value:?}")]
    InvalidFlag { value: String },
}

/// Configuration for the departure board server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Station clock reading at startup.
    pub initial_clock: ClockTime,

    /// Register the demonstration timetable at startup.
    pub demo: bool,

    /// Directory served under `/static`.
    pub static_dir: String,
}

impl BoardConfig {
    /// Defaults overridden by any `BOARD_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get_env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = get_env("BOARD_ADDR") {
            config.addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr { value })?;
        }

        if let Some(value) = get_env("BOARD_CLOCK") {
            config.initial_clock = ClockTime::parse_hhmm(value.trim())
                .map_err(|source| ConfigError::InvalidClock { value, source })?;
        }

        if let Some(value) = get_env("BOARD_DEMO") {
            config.demo = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => return Err(ConfigError::InvalidFlag { value }),
            };
        }

        if let Some(value) = get_env("BOARD_STATIC_DIR").filter(|v| !v.trim().is_empty()) {
            config.static_dir = value;
        }

        Ok(config)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            initial_clock: ClockTime::MIDNIGHT,
            demo: false,
            static_dir: "static".to_string(),
        }
    }
}
