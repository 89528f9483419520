//! In-memory monitor implementation with lock-free atomic counters.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use super::traits::{EventSeverity, Monitor, MonitoringEvent};
use super::types::{MonitoringConfig, MonitoringSnapshot};

/// In-memory monitor with lock-free atomic counters and a bounded ring
/// buffer of recent events.
///
/// # Examples
///
/// ```
/// use airssys_rt::monitoring::{InMemoryMonitor, Monitor, MonitoringConfig, ExecutorEvent, ExecutorEventKind};
/// use chrono::Utc;
/// use std::collections::HashMap;
///
/// let config = MonitoringConfig::default();
/// let monitor = InMemoryMonitor::new(config);
///
/// let event = ExecutorEvent {
///     timestamp: Utc::now(),
///     event_kind: ExecutorEventKind::Stopped,
///     metadata: HashMap::new(),
/// };
/// monitor.record(event);
///
/// let snapshot = monitor.snapshot();
/// assert_eq!(snapshot.total_events, 1);
/// ```
#[derive(Debug)]
pub struct InMemoryMonitor<E: MonitoringEvent> {
    inner: Arc<InMemoryMonitorInner<E>>,
}

#[derive(Debug)]
struct InMemoryMonitorInner<E: MonitoringEvent> {
    config: MonitoringConfig,

    total_events: AtomicU64,
    trace_count: AtomicU64,
    debug_count: AtomicU64,
    info_count: AtomicU64,
    warning_count: AtomicU64,
    error_count: AtomicU64,
    critical_count: AtomicU64,

    history: Mutex<VecDeque<E>>,
}

impl<E: MonitoringEvent> InMemoryMonitor<E> {
    /// Creates a new in-memory monitor with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use airssys_rt::monitoring::{InMemoryMonitor, MonitoringConfig, ExecutorEvent};
    ///
    /// let config = MonitoringConfig::default();
    /// let monitor = InMemoryMonitor::<ExecutorEvent>::new(config);
    /// ```
    pub fn new(config: MonitoringConfig) -> Self {
        Self {
            inner: Arc::new(InMemoryMonitorInner {
                config,
                total_events: AtomicU64::new(0),
                trace_count: AtomicU64::new(0),
                debug_count: AtomicU64::new(0),
                info_count: AtomicU64::new(0),
                warning_count: AtomicU64::new(0),
                error_count: AtomicU64::new(0),
                critical_count: AtomicU64::new(0),
                history: Mutex::new(VecDeque::new()),
            }),
        }
    }

    fn increment_severity_counter(&self, severity: EventSeverity) {
        match severity {
            EventSeverity::Trace => self.inner.trace_count.fetch_add(1, Ordering::Relaxed),
            EventSeverity::Debug => self.inner.debug_count.fetch_add(1, Ordering::Relaxed),
            EventSeverity::Info => self.inner.info_count.fetch_add(1, Ordering::Relaxed),
            EventSeverity::Warning => self.inner.warning_count.fetch_add(1, Ordering::Relaxed),
            EventSeverity::Error => self.inner.error_count.fetch_add(1, Ordering::Relaxed),
            EventSeverity::Critical => self.inner.critical_count.fetch_add(1, Ordering::Relaxed),
        };
    }
}

impl<E: MonitoringEvent> Clone for InMemoryMonitor<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: MonitoringEvent> Monitor<E> for InMemoryMonitor<E> {
    fn record(&self, event: E) {
        if !self.inner.config.enabled {
            return;
        }

        let severity = event.severity();
        if severity < self.inner.config.severity_filter {
            return;
        }

        self.inner.total_events.fetch_add(1, Ordering::Relaxed);
        self.increment_severity_counter(severity);

        let mut history = self.inner.history.lock();
        if history.len() >= self.inner.config.max_history_size {
            history.pop_front();
        }
        history.push_back(event);
    }

    fn snapshot(&self) -> MonitoringSnapshot<E> {
        let total_events = self.inner.total_events.load(Ordering::Relaxed);
        let trace_count = self.inner.trace_count.load(Ordering::Relaxed);
        let debug_count = self.inner.debug_count.load(Ordering::Relaxed);
        let info_count = self.inner.info_count.load(Ordering::Relaxed);
        let warning_count = self.inner.warning_count.load(Ordering::Relaxed);
        let error_count = self.inner.error_count.load(Ordering::Relaxed);
        let critical_count = self.inner.critical_count.load(Ordering::Relaxed);

        let recent_events = self.inner.history.lock().iter().cloned().collect();

        MonitoringSnapshot {
            timestamp: Utc::now(),
            total_events,
            trace_count,
            debug_count,
            info_count,
            warning_count,
            error_count,
            critical_count,
            recent_events,
        }
    }

    fn reset(&self) {
        self.inner.total_events.store(0, Ordering::Relaxed);
        self.inner.trace_count.store(0, Ordering::Relaxed);
        self.inner.debug_count.store(0, Ordering::Relaxed);
        self.inner.info_count.store(0, Ordering::Relaxed);
        self.inner.warning_count.store(0, Ordering::Relaxed);
        self.inner.error_count.store(0, Ordering::Relaxed);
        self.inner.critical_count.store(0, Ordering::Relaxed);
        self.inner.history.lock().clear();
    }
}
