//! The two-priority, MPSC mailbox attached to every actor (§4.1).

// Layer 1: Standard library imports
use std::collections::VecDeque;

// Layer 2: Third-party crate imports
use parking_lot::Mutex;

// Layer 3: Internal module imports
use crate::message::{Message, Priority};

/// Outcome of [`Mailbox::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
    /// The message was queued. `now_scheduled` is `true` when this call is
    /// the one that flipped the mailbox from idle to scheduled — the caller
    /// must submit the owning actor to the executor exactly when this is
    /// `true`.
    Enqueued { now_scheduled: bool },
    /// The mailbox was at capacity; the message was dropped. Caller should
    /// record a `mailbox_full` observation.
    Dropped,
}

struct Inner {
    normal: VecDeque<Message>,
    high: VecDeque<Message>,
    scheduled: bool,
    capacity: Option<usize>,
}

/// Bounded-or-unbounded, two-priority FIFO mailbox.
///
/// All three operations share one critical section (a single
/// [`parking_lot::Mutex`]) so that the "drain then reschedule if new work
/// arrived" handoff between [`Mailbox::pop_one`]/[`Mailbox::mark_idle_if_empty`]
/// and concurrent [`Mailbox::enqueue`] callers is race-free (§4.1 rationale).
pub struct Mailbox {
    inner: Mutex<Inner>,
}

impl Mailbox {
    /// An unbounded mailbox (default; mirrors `SystemConfig::default_mailbox_capacity = None`).
    pub fn unbounded() -> Self {
        Self::with_capacity(None)
    }

    /// A mailbox bounded to `capacity` messages total across both priorities.
    pub fn bounded(capacity: usize) -> Self {
        Self::with_capacity(Some(capacity))
    }

    fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                normal: VecDeque::new(),
                high: VecDeque::new(),
                scheduled: false,
                capacity,
            }),
        }
    }

    /// Push `msg` onto the queue selected by its header's priority.
    pub fn enqueue(&self, msg: Message) -> EnqueueOutcome {
        let mut inner = self.inner.lock();
        if let Some(cap) = inner.capacity {
            if inner.normal.len() + inner.high.len() >= cap {
                return EnqueueOutcome::Dropped;
            }
        }
        match msg.header().priority() {
            Priority::High => inner.high.push_back(msg),
            Priority::Normal => inner.normal.push_back(msg),
        }
        let was_scheduled = inner.scheduled;
        inner.scheduled = true;
        EnqueueOutcome::Enqueued {
            now_scheduled: !was_scheduled,
        }
    }

    /// Pop one message: high priority drains first (§4.1 drain rule).
    pub fn pop_one(&self) -> Option<Message> {
        let mut inner = self.inner.lock();
        inner.high.pop_front().or_else(|| inner.normal.pop_front())
    }

    /// Under the same lock as `enqueue`/`pop_one`: if both queues are empty,
    /// clear the scheduled flag and return `true` (safe to stop scheduling).
    /// Otherwise leave `scheduled` set and return `false`.
    pub fn mark_idle_if_empty(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.normal.is_empty() && inner.high.is_empty() {
            inner.scheduled = false;
            true
        } else {
            false
        }
    }

    /// Total pending messages across both priorities. For diagnostics/tests.
    pub fn len(&self) -> usize {
        let inner = self.inner.lock();
        inner.normal.len() + inner.high.len()
    }

    /// Whether the mailbox currently holds no messages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::address::Dispatchable;
    use crate::util::ids::ActorId;
    use std::sync::Arc;

    struct Noop(ActorId);
    impl Dispatchable for Noop {
        fn deliver(&self, _msg: Message) {}
        fn actor_id(&self) -> ActorId {
            self.0
        }
    }

    fn addr() -> crate::message::Address {
        let sink: Arc<dyn Dispatchable> = Arc::new(Noop(ActorId::next()));
        crate::message::Address::new("t", &sink)
    }

    fn msg(command: &str, priority: Priority) -> Message {
        Message::new(addr(), None, command, priority, crate::message::Payload::empty())
    }

    #[test]
    fn first_enqueue_transitions_to_scheduled() {
        let mbox = Mailbox::unbounded();
        let outcome = mbox.enqueue(msg("a", Priority::Normal));
        assert_eq!(outcome, EnqueueOutcome::Enqueued { now_scheduled: true });
        let outcome2 = mbox.enqueue(msg("b", Priority::Normal));
        assert_eq!(outcome2, EnqueueOutcome::Enqueued { now_scheduled: false });
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn high_priority_drains_before_normal() {
        let mbox = Mailbox::unbounded();
        mbox.enqueue(msg("normal-1", Priority::Normal));
        mbox.enqueue(msg("high-1", Priority::High));
        mbox.enqueue(msg("normal-2", Priority::Normal));

        let first = mbox.pop_one().expect("message");
        assert_eq!(first.header().command(), "high-1");
        let second = mbox.pop_one().expect("message");
        assert_eq!(second.header().command(), "normal-1");
        let third = mbox.pop_one().expect("message");
        assert_eq!(third.header().command(), "normal-2");
    }

    #[test]
    fn mark_idle_only_clears_when_empty() {
        let mbox = Mailbox::unbounded();
        mbox.enqueue(msg("a", Priority::Normal));
        assert!(!mbox.mark_idle_if_empty());
        mbox.pop_one();
        assert!(mbox.mark_idle_if_empty());
    }

    #[test]
    fn bounded_mailbox_drops_when_full() {
        let mbox = Mailbox::bounded(1);
        assert_eq!(
            mbox.enqueue(msg("a", Priority::Normal)),
            EnqueueOutcome::Enqueued { now_scheduled: true }
        );
        assert_eq!(mbox.enqueue(msg("b", Priority::Normal)), EnqueueOutcome::Dropped);
        assert_eq!(mbox.len(), 1);
    }

    #[test]
    fn rescheduled_after_reopened_idle_window() {
        let mbox = Mailbox::unbounded();
        mbox.enqueue(msg("a", Priority::Normal));
        mbox.pop_one();
        assert!(mbox.mark_idle_if_empty());
        let outcome = mbox.enqueue(msg("b", Priority::Normal));
        assert_eq!(outcome, EnqueueOutcome::Enqueued { now_scheduled: true });
    }
}
