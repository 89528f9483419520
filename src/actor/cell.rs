//! `ActorCell`: the behavioral unit owning a mailbox, a dispatch table, and a
//! link to its supervisor (§3, §4.3).

// Layer 1: Standard library imports
use std::sync::{Arc, Weak};

// Layer 3: Internal module imports
use super::core::ActorCore;
use super::ActorCellParts;
use crate::executor::{Device, Executable, Executor};
use crate::message::{Address, Dispatchable, Message};
use crate::monitoring::DynMonitor;
use crate::util::ActorId;

/// A running actor: an address, a mailbox, a dispatch table over its own
/// state `S`, and (unless it is the blocking variant, §4.3.1) an executor to
/// reschedule onto.
///
/// Constructed only through [`crate::supervisor::Supervisor::spawn_actor`] or
/// [`ActorCell::spawn_blocking`] — there is no public constructor, mirroring
/// §3's "becomes reachable only after the supervisor records it".
pub struct ActorCell<S: Send + 'static> {
    core: ActorCore<S>,
    self_ref: Weak<ActorCell<S>>,
    supervisor: Option<Address>,
    executor: Option<Arc<Executor>>,
    blocked: bool,
}

impl<S: Send + 'static> ActorCell<S> {
    /// Construct and wire an `ActorCell` behind an `Arc`, returning the
    /// fully-formed cell so a caller (a `Supervisor`) can both keep the
    /// strong owning handle and hand out its `Address`.
    pub(crate) fn spawn(
        parts: ActorCellParts<S>,
        supervisor: Option<Address>,
        executor: Option<Arc<Executor>>,
        monitor: DynMonitor,
        blocked: bool,
    ) -> Arc<Self> {
        let (type_tag, state, dispatch, mailbox_capacity) = parts;
        let id = ActorId::next();
        Arc::new_cyclic(|weak: &Weak<ActorCell<S>>| {
            let dispatchable: Weak<dyn Dispatchable> = weak.clone();
            ActorCell {
                core: ActorCore::new(type_tag, id, dispatchable, state, dispatch, mailbox_capacity, monitor),
                self_ref: weak.clone(),
                supervisor,
                executor,
                blocked,
            }
        })
    }

    /// Construct the blocking variant (§4.3.1): never placed on an executor
    /// queue, drained by a host loop calling [`ActorCell::drain_blocking`].
    pub fn spawn_blocking(parts: ActorCellParts<S>, supervisor: Option<Address>, monitor: DynMonitor) -> Arc<Self> {
        Self::spawn(parts, supervisor, None, monitor, true)
    }

    /// This actor's stable address.
    pub fn address(&self) -> &Address {
        self.core.address()
    }

    /// This actor's id.
    pub fn id(&self) -> ActorId {
        self.core.id()
    }

    /// Address of the supervisor that owns this actor, if any (the root
    /// supervisor itself has none).
    pub fn supervisor(&self) -> Option<&Address> {
        self.supervisor.as_ref()
    }

    /// Current mailbox depth (diagnostics/tests only).
    pub fn mailbox_len(&self) -> usize {
        self.core.mailbox().len()
    }

    fn drain(&self, max_throughput: usize) {
        let mut state = self.core.lock_state();
        for _ in 0..max_throughput {
            let Some(msg) = self.core.mailbox().pop_one() else {
                break;
            };
            self.core.dispatch_one_locked(&mut state, msg);
        }
    }

    /// Drain up to `max_throughput` messages. Only meaningful for the
    /// blocking variant (§4.3.1) — a host loop calls this directly instead
    /// of the executor calling [`Executable::run`].
    pub fn drain_blocking(&self, max_throughput: usize) {
        self.drain(max_throughput);
    }
}

impl<S: Send + 'static> Dispatchable for ActorCell<S> {
    fn deliver(&self, msg: Message) {
        let now_scheduled = self.core.enqueue(msg);
        if now_scheduled && !self.blocked {
            if let (Some(executor), Some(me)) = (&self.executor, self.self_ref.upgrade()) {
                let exe: Arc<dyn Executable> = me;
                let _ = executor.execute(exe);
            }
        }
    }

    fn actor_id(&self) -> ActorId {
        self.core.id()
    }
}

impl<S: Send + 'static> Executable for ActorCell<S> {
    fn run(self: Arc<Self>, device: &Device<'_>, max_throughput: usize) {
        self.drain(max_throughput);
        if !self.core.mailbox().mark_idle_if_empty() {
            device.submit(self.clone());
        }
    }

    fn is_blocked(&self) -> bool {
        self.blocked
    }
}
