//! Monitoring event types and configuration structures.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::traits::{EventSeverity, MonitoringEvent};
use crate::util::ActorId;

/// Configuration for monitoring behavior.
///
/// Controls how events are recorded, filtered, and stored in the monitor.
#[derive(Debug, Clone, Serialize)]
pub struct MonitoringConfig {
    /// Whether monitoring is enabled
    pub enabled: bool,

    /// Maximum number of events to keep in history
    pub max_history_size: usize,

    /// Minimum severity level to record (events below this are filtered)
    pub severity_filter: EventSeverity,

    /// Interval for snapshot generation (if using background snapshots)
    #[serde(with = "crate::util::duration_serde")]
    pub snapshot_interval: Duration,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_history_size: 1000,
            severity_filter: EventSeverity::Info,
            snapshot_interval: Duration::from_secs(60),
        }
    }
}

/// Snapshot of monitoring state at a point in time.
///
/// Provides queryable access to monitoring counters and recent event history.
#[derive(Debug, Clone, Serialize)]
pub struct MonitoringSnapshot<E: MonitoringEvent> {
    /// Timestamp when snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Total number of events recorded
    pub total_events: u64,

    /// Number of trace-level events
    pub trace_count: u64,

    /// Number of debug-level events
    pub debug_count: u64,

    /// Number of info-level events
    pub info_count: u64,

    /// Number of warning-level events
    pub warning_count: u64,

    /// Number of error-level events
    pub error_count: u64,

    /// Number of critical-level events
    pub critical_count: u64,

    /// Recent events (up to max_history_size)
    pub recent_events: Vec<E>,
}

// ============================================================================
// Dispatch events (§4.2, §7) — routing misses and payload mismatches.
// ============================================================================

/// Events emitted when a [`crate::dispatch::DispatchTable`] processes a
/// message that does not cleanly invoke a handler.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchEvent {
    /// Timestamp when event occurred
    pub timestamp: DateTime<Utc>,

    /// The actor whose dispatch table processed the message
    pub actor_id: ActorId,

    /// The command name that was looked up
    pub command: String,

    /// Specific dispatch event kind
    pub event_kind: DispatchEventKind,

    /// Additional event metadata
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for DispatchEvent {
    const EVENT_TYPE: &'static str = "dispatch";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            DispatchEventKind::Unhandled => EventSeverity::Warning,
            DispatchEventKind::BadMessage { .. } => EventSeverity::Warning,
        }
    }
}

/// Specific types of dispatch events.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum DispatchEventKind {
    /// No handler registered under the command name (§7 routing miss).
    Unhandled,

    /// A handler exists but the payload's arity/types didn't match what it
    /// declared at registration (§7 decoding miss).
    BadMessage {
        /// Types the handler declared.
        expected_types: Vec<String>,
        /// Types actually carried by the payload.
        actual_types: Vec<String>,
    },
}

// ============================================================================
// Mailbox events (§4.1) — enqueue outcomes and backpressure.
// ============================================================================

/// Events related to mailbox enqueue operations.
#[derive(Debug, Clone, Serialize)]
pub struct MailboxEvent {
    /// Timestamp when event occurred
    pub timestamp: DateTime<Utc>,

    /// ID of the actor owning the mailbox
    pub actor_id: ActorId,

    /// Specific mailbox event type
    pub event_kind: MailboxEventKind,

    /// Additional event metadata
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for MailboxEvent {
    const EVENT_TYPE: &'static str = "mailbox";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            MailboxEventKind::Enqueued { .. } => EventSeverity::Trace,
            MailboxEventKind::Dropped => EventSeverity::Warning,
        }
    }
}

/// Specific types of mailbox events.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum MailboxEventKind {
    /// Message accepted into the mailbox.
    Enqueued {
        /// Combined normal+high queue length immediately after the push.
        queue_len: usize,
        /// Whether this push flipped the mailbox from idle to scheduled.
        scheduled: bool,
    },

    /// Message dropped because the mailbox was at capacity (§5 bounded
    /// mailboxes).
    Dropped,
}

// ============================================================================
// Routing events (§4.4) — supervisor delivery to unknown addresses.
// ============================================================================

/// Events emitted when a supervisor cannot route a message.
#[derive(Debug, Clone, Serialize)]
pub struct RoutingEvent {
    /// Timestamp when event occurred
    pub timestamp: DateTime<Utc>,

    /// ID of the supervisor that attempted the route
    pub supervisor_id: ActorId,

    /// Specific routing event type
    pub event_kind: RoutingEventKind,

    /// Additional event metadata
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for RoutingEvent {
    const EVENT_TYPE: &'static str = "routing";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            RoutingEventKind::Unroutable { .. } => EventSeverity::Error,
        }
    }
}

/// Specific types of routing events.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum RoutingEventKind {
    /// The recipient address was not found among the supervisor's children.
    Unroutable {
        /// Display form of the address that could not be resolved.
        recipient: String,
    },
}

// ============================================================================
// Executor events (§4.5, §4.6) — device lifecycle and work-stealing.
// ============================================================================

/// Events related to the work-stealing executor's lifecycle.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutorEvent {
    /// Timestamp when event occurred
    pub timestamp: DateTime<Utc>,

    /// Specific executor event type
    pub event_kind: ExecutorEventKind,

    /// Additional event metadata
    pub metadata: HashMap<String, String>,
}

impl MonitoringEvent for ExecutorEvent {
    const EVENT_TYPE: &'static str = "executor";

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn severity(&self) -> EventSeverity {
        match &self.event_kind {
            ExecutorEventKind::Started { .. } => EventSeverity::Info,
            ExecutorEventKind::Stopped => EventSeverity::Info,
            ExecutorEventKind::DeviceSpawned { .. } => EventSeverity::Debug,
            ExecutorEventKind::WorkStolen { .. } => EventSeverity::Trace,
        }
    }
}

/// Specific types of executor events.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ExecutorEventKind {
    /// The executor's device fleet came up.
    Started {
        /// Number of Devices started.
        threads: usize,
    },

    /// The executor's device fleet was brought down.
    Stopped,

    /// A single Device thread was spawned.
    DeviceSpawned {
        /// Index of the Device within the fleet.
        device_index: usize,
    },

    /// A Device stole an Executable from a peer's local queue (§4.5).
    WorkStolen {
        /// Index of the Device that performed the steal.
        thief: usize,
        /// Index of the Device whose queue was stolen from.
        victim: usize,
    },
}

// ============================================================================
// Unified event sum type — one `Monitor` sink observes all four subsystems.
// ============================================================================

/// Union of every event kind the runtime emits.
///
/// The four subsystems (dispatch, mailbox, routing, executor) each define
/// their own distinct event struct above; this wraps them so a single
/// injected [`super::Monitor`] can observe the whole runtime without every
/// component threading its own generic monitor type parameter.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "subsystem")]
pub enum RuntimeEvent {
    /// A dispatch-table routing or decoding miss.
    Dispatch(DispatchEvent),
    /// A mailbox enqueue outcome.
    Mailbox(MailboxEvent),
    /// A supervisor routing miss.
    Routing(RoutingEvent),
    /// An executor lifecycle or work-stealing event.
    Executor(ExecutorEvent),
}

impl MonitoringEvent for RuntimeEvent {
    const EVENT_TYPE: &'static str = "runtime";

    fn timestamp(&self) -> DateTime<Utc> {
        match self {
            RuntimeEvent::Dispatch(e) => e.timestamp(),
            RuntimeEvent::Mailbox(e) => e.timestamp(),
            RuntimeEvent::Routing(e) => e.timestamp(),
            RuntimeEvent::Executor(e) => e.timestamp(),
        }
    }

    fn severity(&self) -> EventSeverity {
        match self {
            RuntimeEvent::Dispatch(e) => e.severity(),
            RuntimeEvent::Mailbox(e) => e.severity(),
            RuntimeEvent::Routing(e) => e.severity(),
            RuntimeEvent::Executor(e) => e.severity(),
        }
    }
}

impl From<DispatchEvent> for RuntimeEvent {
    fn from(event: DispatchEvent) -> Self {
        RuntimeEvent::Dispatch(event)
    }
}

impl From<MailboxEvent> for RuntimeEvent {
    fn from(event: MailboxEvent) -> Self {
        RuntimeEvent::Mailbox(event)
    }
}

impl From<RoutingEvent> for RuntimeEvent {
    fn from(event: RoutingEvent) -> Self {
        RuntimeEvent::Routing(event)
    }
}

impl From<ExecutorEvent> for RuntimeEvent {
    fn from(event: ExecutorEvent) -> Self {
        RuntimeEvent::Executor(event)
    }
}
