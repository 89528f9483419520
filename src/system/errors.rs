//! Construction-time and configuration-time error type (§7.1).
//!
//! Per-message failures (routing miss, decoding miss) never construct a
//! `RuntimeError` — those are silent, counted observations reported through
//! [`crate::monitoring`] instead.

// Layer 2: Third-party crate imports
use thiserror::Error;

/// Every fallible constructor in the crate funnels into this one enum.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// `DispatchTableBuilder::add_handlerN` was called twice with the same
    /// command name. Fatal at construction — a static misuse (§7).
    #[error("duplicate handler registration for command {command:?}")]
    DuplicateHandler {
        /// The command name that collided.
        command: String,
    },

    /// A `SystemConfig`/`ExecutorConfig` builder was given an invalid value.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of what failed validation.
        reason: String,
    },

    /// `Executor::start()` called on an executor that is already running.
    #[error("executor already started")]
    ExecutorAlreadyStarted,

    /// `Executor::execute`/`stop` called before `start()`.
    #[error("executor not started")]
    ExecutorNotStarted,

    /// The OS refused to spawn one of the executor's device threads.
    #[error("failed to spawn device thread {device_index}: {reason}")]
    DeviceSpawnFailed {
        /// Index of the device whose thread failed to spawn.
        device_index: usize,
        /// The OS error reported by `std::thread::Builder::spawn`.
        reason: String,
    },
}
