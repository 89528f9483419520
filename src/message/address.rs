//! Non-owning actor handles.

// Layer 1: Standard library imports
use std::fmt;
use std::sync::{Arc, Weak};

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use super::envelope::Message;
use crate::util::ids::ActorId;

/// Anything a [`Message`] can be delivered to.
///
/// Implemented by `ActorCell` and by `Supervisor` (which composes one) — see
/// DESIGN.md. Kept in this module, rather than `crate::actor`, so that
/// [`Address`] never needs to name a concrete actor type: it only needs an
/// object it can deliver into.
pub trait Dispatchable: Send + Sync {
    /// Hand a fully constructed message to this recipient's mailbox. Must
    /// not block and must not run any handler inline.
    fn deliver(&self, msg: Message);

    /// Stable id of the recipient, for diagnostics and `Address` equality.
    fn actor_id(&self) -> ActorId;
}

/// A cheap, non-owning handle identifying one actor.
///
/// Comparing two addresses compares their [`ActorId`] only; the weak
/// reference never keeps the actor alive, and may have already expired by
/// the time a caller inspects it (the actor was torn down).
#[derive(Clone)]
pub struct Address {
    id: ActorId,
    type_tag: Arc<str>,
    inner: Weak<dyn Dispatchable>,
}

impl Address {
    /// Build an address pointing at `target`. `type_tag` is a short,
    /// human-readable label (e.g. the actor's struct name) used only for
    /// diagnostics.
    pub fn new(type_tag: impl Into<Arc<str>>, target: &Arc<dyn Dispatchable>) -> Self {
        Self {
            id: target.actor_id(),
            type_tag: type_tag.into(),
            inner: Arc::downgrade(target),
        }
    }

    /// Build an address from an already-weak handle, `id`, and `type_tag`.
    ///
    /// Needed for `Arc::new_cyclic` construction (`ActorCell::spawn`), where
    /// the target's own `Arc` does not exist yet when its `Address` must be
    /// built.
    pub(crate) fn from_weak(type_tag: impl Into<Arc<str>>, id: ActorId, inner: Weak<dyn Dispatchable>) -> Self {
        Self {
            id,
            type_tag: type_tag.into(),
            inner,
        }
    }

    /// Stable id of the addressed actor.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Human-readable type tag supplied at construction.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Whether the actor behind this address is still alive.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Deliver `msg` to the addressed actor's mailbox. A dead address
    /// silently drops the message (fire-and-forget semantics, §7).
    pub(crate) fn deliver(&self, msg: Message) {
        if let Some(target) = self.inner.upgrade() {
            target.deliver(msg);
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("id", &self.id)
            .field("type_tag", &self.type_tag)
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Address {}

impl std::hash::Hash for Address {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.type_tag, self.id)
    }
}
