//! Observability for the materials service and client
//!
//! Logging is done with `tracing` events throughout the crate; this module
//! only installs the subscriber.
//!
//! # Usage
//!
//! ```ignore
//! use materials::observability::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default())?;
//! tracing::info!(id = 1, "material created");
//! ```

mod logging;

pub use logging::{init_logging, LogConfig, LogFormat};

use std::fmt;

/// Observability error
///
/// Never fatal: a process that cannot install its logger keeps running.
#[derive(Debug)]
pub struct ObservabilityError {
    message: String,
}

impl ObservabilityError {
    /// Create a new observability error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MATERIALS_OBSERVABILITY_FAILED: {}", self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
