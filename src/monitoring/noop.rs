//! No-operation monitor implementation with zero overhead.

use std::marker::PhantomData;

use chrono::Utc;

use super::traits::{Monitor, MonitoringEvent};
use super::types::MonitoringSnapshot;

/// No-operation monitor that discards all events with zero overhead.
///
/// Used when `SystemConfig::enable_monitoring` is `false` (§3.1) — the
/// dispatch/mailbox/executor call sites stay identical, they simply talk to
/// a monitor that throws everything away.
///
/// # Examples
///
/// ```
/// use airssys_rt::monitoring::{NoopMonitor, Monitor, ExecutorEvent};
///
/// let monitor = NoopMonitor::<ExecutorEvent>::new();
/// let snapshot = monitor.snapshot();
/// assert_eq!(snapshot.total_events, 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMonitor<E: MonitoringEvent> {
    _phantom: PhantomData<E>,
}

impl<E: MonitoringEvent> NoopMonitor<E> {
    /// Creates a new no-operation monitor.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<E: MonitoringEvent> Monitor<E> for NoopMonitor<E> {
    #[inline(always)]
    fn record(&self, _event: E) {}

    #[inline(always)]
    fn snapshot(&self) -> MonitoringSnapshot<E> {
        MonitoringSnapshot {
            timestamp: Utc::now(),
            total_events: 0,
            trace_count: 0,
            debug_count: 0,
            info_count: 0,
            warning_count: 0,
            error_count: 0,
            critical_count: 0,
            recent_events: Vec::new(),
        }
    }

    #[inline(always)]
    fn reset(&self) {}
}
