//! Core monitoring traits for universal event observation.

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::{MonitoringSnapshot, RuntimeEvent};

/// Event severity levels for filtering and categorization.
///
/// Ordered from lowest to highest severity for filtering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum EventSeverity {
    /// Trace-level events for detailed debugging
    Trace,
    /// Debug-level events for development
    Debug,
    /// Informational events for normal operations
    Info,
    /// Warning events for potential issues
    Warning,
    /// Error events for failures
    Error,
    /// Critical events for system-level failures
    Critical,
}

/// Trait for events that can be monitored.
///
/// All event types must implement this trait to be compatible with the
/// `Monitor<E>` system.
///
/// # Examples
/// ```
/// use airssys_rt::monitoring::{MonitoringEvent, EventSeverity};
/// use chrono::{DateTime, Utc};
/// use serde::Serialize;
///
/// #[derive(Debug, Clone, Serialize)]
/// struct MyEvent {
///     timestamp: DateTime<Utc>,
///     message: String,
/// }
///
/// impl MonitoringEvent for MyEvent {
///     const EVENT_TYPE: &'static str = "my_event";
///
///     fn timestamp(&self) -> DateTime<Utc> {
///         self.timestamp
///     }
///
///     fn severity(&self) -> EventSeverity {
///         EventSeverity::Info
///     }
/// }
/// ```
pub trait MonitoringEvent: Send + Sync + Clone + Debug + Serialize + 'static {
    /// Static event type identifier for categorization.
    const EVENT_TYPE: &'static str;

    /// Returns the timestamp when this event occurred.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Returns the severity level of this event.
    fn severity(&self) -> EventSeverity;
}

/// Sink for the silent, per-message observations the dispatch table,
/// mailbox, and supervisor routing emit (§3.2, §7).
///
/// Unlike [`crate::system::RuntimeError`], nothing here is fallible: a
/// monitor is called from inside the hot `Device::run` path and must never
/// block or fail the actor it is observing. Implementations range from a
/// zero-overhead [`super::NoopMonitor`] to a full-featured
/// [`super::InMemoryMonitor`] with bounded history.
///
/// # Type Parameters
/// - `E`: The event type this monitor records, constrained by
///   [`MonitoringEvent`].
pub trait Monitor<E: MonitoringEvent>: Send + Sync + Clone {
    /// Records a monitoring event.
    fn record(&self, event: E);

    /// Returns a snapshot of the current monitoring state.
    fn snapshot(&self) -> MonitoringSnapshot<E>;

    /// Clears all counters and history.
    fn reset(&self);
}

/// Object-safe recording surface over [`RuntimeEvent`].
///
/// [`Monitor`] itself cannot be turned into a trait object (its `Clone`
/// supertrait isn't object-safe), so every component that needs to hold one
/// dynamically — `ActorCell`, `Supervisor`, `Executor` — stores a
/// [`DynMonitor`] instead. Any concrete `Monitor<RuntimeEvent>`
/// (e.g. `InMemoryMonitor<RuntimeEvent>`, `NoopMonitor<RuntimeEvent>`)
/// implements this automatically.
pub trait MonitorSink: Send + Sync {
    /// Records an event, routing it through the underlying [`Monitor`].
    fn record(&self, event: RuntimeEvent);
}

impl<M: Monitor<RuntimeEvent>> MonitorSink for M {
    fn record(&self, event: RuntimeEvent) {
        Monitor::record(self, event);
    }
}

/// Shared handle to a [`MonitorSink`], cloned freely across actors and
/// devices.
pub type DynMonitor = Arc<dyn MonitorSink>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize)]
    struct TestEvent {
        timestamp: DateTime<Utc>,
        message: String,
        severity: EventSeverity,
    }

    impl MonitoringEvent for TestEvent {
        const EVENT_TYPE: &'static str = "test_event";

        fn timestamp(&self) -> DateTime<Utc> {
            self.timestamp
        }

        fn severity(&self) -> EventSeverity {
            self.severity
        }
    }

    #[test]
    fn test_event_severity_ordering() {
        assert!(EventSeverity::Trace < EventSeverity::Debug);
        assert!(EventSeverity::Debug < EventSeverity::Info);
        assert!(EventSeverity::Info < EventSeverity::Warning);
        assert!(EventSeverity::Warning < EventSeverity::Error);
        assert!(EventSeverity::Error < EventSeverity::Critical);
    }

    #[test]
    fn test_event_severity_equality() {
        assert_eq!(EventSeverity::Info, EventSeverity::Info);
        assert_ne!(EventSeverity::Info, EventSeverity::Warning);
    }

    #[test]
    fn test_monitoring_event_implementation() {
        let now = Utc::now();
        let event = TestEvent {
            timestamp: now,
            message: "Test message".to_string(),
            severity: EventSeverity::Info,
        };

        assert_eq!(event.timestamp(), now);
        assert_eq!(event.severity(), EventSeverity::Info);
        assert_eq!(TestEvent::EVENT_TYPE, "test_event");
    }

    #[test]
    fn test_monitoring_event_clone() {
        let event = TestEvent {
            timestamp: Utc::now(),
            message: "Original".to_string(),
            severity: EventSeverity::Debug,
        };

        let cloned = event.clone();
        assert_eq!(event.timestamp(), cloned.timestamp());
        assert_eq!(event.message, cloned.message);
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_event_severity_serialization() {
        let severity = EventSeverity::Warning;
        let json = serde_json::to_string(&severity).expect("Serialization should succeed");
        assert!(json.contains("Warning"));
    }

    #[test]
    fn test_dyn_monitor_records_through_sink() {
        use super::super::in_memory::InMemoryMonitor;
        use super::super::types::{ExecutorEvent, ExecutorEventKind, MonitoringConfig};
        use std::collections::HashMap;

        let concrete = InMemoryMonitor::<RuntimeEvent>::new(MonitoringConfig::default());
        let sink: DynMonitor = Arc::new(concrete.clone());

        sink.record(
            ExecutorEvent {
                timestamp: Utc::now(),
                event_kind: ExecutorEventKind::Stopped,
                metadata: HashMap::new(),
            }
            .into(),
        );

        assert_eq!(concrete.snapshot().total_events, 1);
    }
}
