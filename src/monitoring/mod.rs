//! # Monitoring module
//!
//! Universal, infallible event observation for the runtime's silent
//! per-message failure paths (§3.2, §7): a dispatch miss, a dropped
//! mailbox message, an unroutable supervisor delivery, or an executor
//! lifecycle transition never surfaces as a `Result::Err` — it is reported
//! through an injected [`Monitor`] instead.
//!
//! ## Event Types
//! - [`DispatchEvent`]: unhandled commands and payload mismatches
//! - [`MailboxEvent`]: enqueue/drop outcomes
//! - [`RoutingEvent`]: supervisor delivery to an unknown address
//! - [`ExecutorEvent`]: device fleet lifecycle and work-stealing
//!
//! ## Implementations
//! - [`NoopMonitor`]: zero-overhead, used when monitoring is disabled
//! - [`InMemoryMonitor`]: atomic counters plus a bounded event history ring
//!
//! ## Examples
//! ```
//! use airssys_rt::monitoring::{InMemoryMonitor, Monitor, MonitoringConfig, ExecutorEvent, ExecutorEventKind};
//! use std::collections::HashMap;
//! use chrono::Utc;
//!
//! let config = MonitoringConfig::default();
//! let monitor = InMemoryMonitor::new(config);
//!
//! monitor.record(ExecutorEvent {
//!     timestamp: Utc::now(),
//!     event_kind: ExecutorEventKind::Started { threads: 4 },
//!     metadata: HashMap::new(),
//! });
//!
//! let snapshot = monitor.snapshot();
//! assert_eq!(snapshot.total_events, 1);
//! ```

pub mod error;
pub mod in_memory;
pub mod noop;
pub mod traits;
pub mod types;

pub use error::MonitoringError;
pub use in_memory::InMemoryMonitor;
pub use noop::NoopMonitor;
pub use traits::{DynMonitor, EventSeverity, Monitor, MonitorSink, MonitoringEvent};
pub use types::{
    DispatchEvent, DispatchEventKind, ExecutorEvent, ExecutorEventKind, MailboxEvent,
    MailboxEventKind, MonitoringConfig, MonitoringSnapshot, RoutingEvent, RoutingEventKind,
    RuntimeEvent,
};
