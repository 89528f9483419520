//! Validated, builder-constructed configuration (§3.1).

// Layer 1: Standard library imports
use std::num::NonZeroUsize;
use std::time::Duration;

// Layer 2: Third-party crate imports
use serde::{Deserialize, Serialize};

// Layer 3: Internal module imports
use super::errors::RuntimeError;

/// Default spawn timeout (5 seconds).
pub const DEFAULT_SPAWN_TIMEOUT: Duration = Duration::from_secs(5);
/// Default shutdown timeout (30 seconds).
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);
/// Default `throughput_per_run` (§6 fairness knob).
pub const DEFAULT_THROUGHPUT_PER_RUN: usize = 32;

/// Process-wide defaults for actors spawned under a given system (§3.1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// `None` = unbounded mailboxes (default); `Some(n)` bounds every
    /// actor's mailbox to `n` messages unless overridden per-actor.
    pub default_mailbox_capacity: Option<usize>,
    /// Upper bound on how long `spawn_actor`/`spawn_supervisor` may take.
    #[serde(with = "crate::util::serde_helpers::duration_serde")]
    pub spawn_timeout: Duration,
    /// Upper bound on graceful teardown.
    #[serde(with = "crate::util::serde_helpers::duration_serde")]
    pub shutdown_timeout: Duration,
    /// Whether a non-noop `Monitor` should be attached by default.
    pub enable_monitoring: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            default_mailbox_capacity: None,
            spawn_timeout: DEFAULT_SPAWN_TIMEOUT,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            enable_monitoring: false,
        }
    }
}

impl SystemConfig {
    /// Start building a configuration.
    pub fn builder() -> SystemConfigBuilder {
        SystemConfigBuilder::default()
    }

    fn validate(&self) -> Result<(), RuntimeError> {
        if let Some(0) = self.default_mailbox_capacity {
            return Err(RuntimeError::InvalidConfig {
                reason: "default_mailbox_capacity must be > 0 when bounded".to_string(),
            });
        }
        if self.spawn_timeout.is_zero() {
            return Err(RuntimeError::InvalidConfig {
                reason: "spawn_timeout must be > 0".to_string(),
            });
        }
        if self.shutdown_timeout.is_zero() {
            return Err(RuntimeError::InvalidConfig {
                reason: "shutdown_timeout must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Fluent builder for [`SystemConfig`].
#[derive(Debug, Default)]
pub struct SystemConfigBuilder {
    config: SystemConfig,
}

impl SystemConfigBuilder {
    /// Bound every actor's mailbox to `capacity` messages by default.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.config.default_mailbox_capacity = Some(capacity);
        self
    }

    /// Set the spawn timeout.
    pub fn with_spawn_timeout(mut self, timeout: Duration) -> Self {
        self.config.spawn_timeout = timeout;
        self
    }

    /// Set the shutdown timeout.
    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.config.shutdown_timeout = timeout;
        self
    }

    /// Attach a non-noop monitor by default.
    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.config.enable_monitoring = enabled;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<SystemConfig, RuntimeError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Executor tuning, corresponding 1:1 to §6's `{threads, throughput_per_run,
/// stealing}` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Number of worker threads (Devices). Defaults to
    /// [`std::thread::available_parallelism`].
    pub threads: NonZeroUsize,
    /// Maximum messages an actor drains per `run` (§4.5 fairness knob).
    pub throughput_per_run: NonZeroUsize,
    /// Whether idle Devices attempt to steal from peers (§4.5).
    pub stealing: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        let threads = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self {
            threads,
            throughput_per_run: NonZeroUsize::new(DEFAULT_THROUGHPUT_PER_RUN)
                .unwrap_or(NonZeroUsize::MIN),
            stealing: true,
        }
    }
}

impl ExecutorConfig {
    /// Start building a configuration.
    pub fn builder() -> ExecutorConfigBuilder {
        ExecutorConfigBuilder::default()
    }
}

/// Fluent builder for [`ExecutorConfig`].
#[derive(Debug, Default)]
pub struct ExecutorConfigBuilder {
    threads: Option<usize>,
    throughput_per_run: Option<usize>,
    stealing: Option<bool>,
}

impl ExecutorConfigBuilder {
    /// Number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Messages drained per `run`.
    pub fn with_throughput_per_run(mut self, throughput: usize) -> Self {
        self.throughput_per_run = Some(throughput);
        self
    }

    /// Enable or disable cross-device stealing.
    pub fn with_stealing(mut self, enabled: bool) -> Self {
        self.stealing = Some(enabled);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<ExecutorConfig, RuntimeError> {
        let defaults = ExecutorConfig::default();
        let threads = match self.threads {
            Some(0) => {
                return Err(RuntimeError::InvalidConfig {
                    reason: "threads must be > 0".to_string(),
                })
            }
            Some(n) => NonZeroUsize::new(n).unwrap_or(defaults.threads),
            None => defaults.threads,
        };
        let throughput_per_run = match self.throughput_per_run {
            Some(0) => {
                return Err(RuntimeError::InvalidConfig {
                    reason: "throughput_per_run must be > 0".to_string(),
                })
            }
            Some(n) => NonZeroUsize::new(n).unwrap_or(defaults.throughput_per_run),
            None => defaults.throughput_per_run,
        };
        Ok(ExecutorConfig {
            threads,
            throughput_per_run,
            stealing: self.stealing.unwrap_or(defaults.stealing),
        })
    }
}
