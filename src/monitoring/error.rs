//! Monitoring configuration error.

use thiserror::Error;

/// Errors raised while constructing monitoring configuration.
///
/// Recording, snapshotting, and resetting a [`super::Monitor`] are
/// infallible by design (§3.2) — only building the configuration itself can
/// fail.
#[derive(Debug, Error)]
pub enum MonitoringError {
    /// A [`super::MonitoringConfig`] field failed validation.
    #[error("configuration error: {message}")]
    Configuration {
        /// Human-readable description of what failed validation.
        message: String,
    },
}

impl MonitoringError {
    /// Creates a new configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
