//! Process-wide configuration and construction-time errors.

pub mod config;
pub mod errors;

pub use config::{
    ExecutorConfig, ExecutorConfigBuilder, SystemConfig, SystemConfigBuilder,
    DEFAULT_SHUTDOWN_TIMEOUT, DEFAULT_SPAWN_TIMEOUT, DEFAULT_THROUGHPUT_PER_RUN,
};
pub use errors::RuntimeError;
