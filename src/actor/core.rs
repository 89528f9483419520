//! Shared innards of [`super::ActorCell`] and [`crate::supervisor::Supervisor`]:
//! address, mailbox, dispatch table, and owned state.
//!
//! Pulled out so a `Supervisor` can compose the same machinery an `ActorCell`
//! uses instead of inheriting from it (§9 design note) — the two differ only
//! in what decides which message gets dispatched where, which lives one
//! layer up in each type's own `run`.

// Layer 1: Standard library imports
use std::collections::HashMap;
use std::sync::Weak;

// Layer 2: Third-party crate imports
use chrono::Utc;
use parking_lot::{Mutex, MutexGuard};

// Layer 3: Internal module imports
use crate::dispatch::{DispatchContext, DispatchOutcome, DispatchTable};
use crate::mailbox::{EnqueueOutcome, Mailbox};
use crate::message::{Address, Dispatchable, Message};
use crate::monitoring::{DispatchEvent, DispatchEventKind, DynMonitor, MailboxEvent, MailboxEventKind};
use crate::util::ActorId;

pub(crate) struct ActorCore<S: Send + 'static> {
    id: ActorId,
    address: Address,
    state: Mutex<S>,
    dispatch: DispatchTable<S>,
    mailbox: Mailbox,
    monitor: DynMonitor,
}

impl<S: Send + 'static> ActorCore<S> {
    pub(crate) fn new(
        type_tag: std::sync::Arc<str>,
        id: ActorId,
        dispatchable: Weak<dyn Dispatchable>,
        state: S,
        dispatch: DispatchTable<S>,
        mailbox_capacity: Option<usize>,
        monitor: DynMonitor,
    ) -> Self {
        let mailbox = match mailbox_capacity {
            Some(capacity) => Mailbox::bounded(capacity),
            None => Mailbox::unbounded(),
        };
        Self {
            id,
            address: Address::from_weak(type_tag, id, dispatchable),
            state: Mutex::new(state),
            dispatch,
            mailbox,
            monitor,
        }
    }

    pub(crate) fn id(&self) -> ActorId {
        self.id
    }

    pub(crate) fn address(&self) -> &Address {
        &self.address
    }

    pub(crate) fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    pub(crate) fn monitor(&self) -> &DynMonitor {
        &self.monitor
    }

    pub(crate) fn lock_state(&self) -> MutexGuard<'_, S> {
        self.state.lock()
    }

    /// Enqueue `msg`, recording the resulting [`MailboxEvent`]. Returns
    /// whether this call flipped the mailbox from idle to scheduled — the
    /// caller must submit its own runnable handle to the executor exactly
    /// then.
    pub(crate) fn enqueue(&self, msg: Message) -> bool {
        let outcome = self.mailbox.enqueue(msg);
        match outcome {
            EnqueueOutcome::Enqueued { now_scheduled } => {
                self.monitor.record(
                    MailboxEvent {
                        timestamp: Utc::now(),
                        actor_id: self.id,
                        event_kind: MailboxEventKind::Enqueued {
                            queue_len: self.mailbox.len(),
                            scheduled: now_scheduled,
                        },
                        metadata: HashMap::new(),
                    }
                    .into(),
                );
                now_scheduled
            }
            EnqueueOutcome::Dropped => {
                tracing::warn!(actor = %self.id, "mailbox full, message dropped");
                self.monitor.record(
                    MailboxEvent {
                        timestamp: Utc::now(),
                        actor_id: self.id,
                        event_kind: MailboxEventKind::Dropped,
                        metadata: HashMap::new(),
                    }
                    .into(),
                );
                false
            }
        }
    }

    /// Look up and invoke `msg`'s command against `state`'s dispatch table,
    /// recording a monitor event for anything short of a clean invocation
    /// (§7: dispatch failures are silent to the caller, visible only to the
    /// monitor).
    pub(crate) fn dispatch_one_locked(&self, state: &mut S, msg: Message) {
        let ctx = DispatchContext::new(&self.address);
        let command = msg.header().command().to_string();
        match self.dispatch.dispatch(state, msg, &ctx) {
            DispatchOutcome::Invoked => {}
            DispatchOutcome::Unhandled => {
                tracing::debug!(actor = %self.id, command = %command, "unhandled command");
                self.monitor.record(
                    DispatchEvent {
                        timestamp: Utc::now(),
                        actor_id: self.id,
                        command,
                        event_kind: DispatchEventKind::Unhandled,
                        metadata: HashMap::new(),
                    }
                    .into(),
                );
            }
            DispatchOutcome::BadMessage { expected, actual } => {
                tracing::warn!(actor = %self.id, command = %command, "bad message payload");
                self.monitor.record(
                    DispatchEvent {
                        timestamp: Utc::now(),
                        actor_id: self.id,
                        command,
                        event_kind: DispatchEventKind::BadMessage {
                            expected_types: expected.iter().map(|d| d.type_name().to_string()).collect(),
                            actual_types: actual.iter().map(|d| d.type_name().to_string()).collect(),
                        },
                        metadata: HashMap::new(),
                    }
                    .into(),
                );
            }
        }
    }
}
