//! Builder for an [`super::ActorCell`]'s immutable parts (§3: dispatch table
//! insertion only allowed during construction).

// Layer 1: Standard library imports
use std::sync::Arc;

// Layer 3: Internal module imports
use crate::dispatch::{DispatchContext, DispatchTable, DispatchTableBuilder};
use crate::system::RuntimeError;

/// The pieces handed to [`super::ActorCell::spawn`]: everything needed to
/// build the cell except the identity and wiring, which only `spawn` itself
/// can assign (it needs the `Arc` to exist first).
pub(crate) type ActorCellParts<S> = (Arc<str>, S, DispatchTable<S>, Option<usize>);

/// Accumulates an actor's initial state, handler registrations, and mailbox
/// sizing before it is handed to a [`crate::supervisor::Supervisor`] to spawn.
pub struct ActorCellBuilder<S: Send + 'static> {
    type_tag: Arc<str>,
    state: S,
    dispatch: DispatchTableBuilder<S>,
    mailbox_capacity: Option<usize>,
}

impl<S: Send + 'static> ActorCellBuilder<S> {
    /// Start building an actor labeled `type_tag` (diagnostics only) with
    /// initial state `state`.
    pub fn new(type_tag: impl Into<Arc<str>>, state: S) -> Self {
        Self {
            type_tag: type_tag.into(),
            state,
            dispatch: DispatchTableBuilder::new(),
            mailbox_capacity: None,
        }
    }

    /// Bound the mailbox to `capacity` messages (§5), overriding the owning
    /// supervisor's [`crate::system::SystemConfig::default_mailbox_capacity`].
    /// Left unset, the actor inherits that default (itself unbounded unless
    /// the supervisor was built with one).
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = Some(capacity);
        self
    }

    /// Register a zero-argument handler under `name`.
    pub fn add_handler0(
        mut self,
        name: &str,
        f: impl Fn(&mut S, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.dispatch = self.dispatch.add_handler0(name, f)?;
        Ok(self)
    }

    /// Register a one-argument handler under `name`.
    pub fn add_handler1<T1: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut S, T1, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.dispatch = self.dispatch.add_handler1(name, f)?;
        Ok(self)
    }

    /// Register a two-argument handler under `name`.
    pub fn add_handler2<T1: Send + 'static, T2: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut S, T1, T2, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.dispatch = self.dispatch.add_handler2(name, f)?;
        Ok(self)
    }

    /// Register a three-argument handler under `name`.
    pub fn add_handler3<T1: Send + 'static, T2: Send + 'static, T3: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut S, T1, T2, T3, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.dispatch = self.dispatch.add_handler3(name, f)?;
        Ok(self)
    }

    /// Register a four-argument handler under `name`.
    pub fn add_handler4<T1: Send + 'static, T2: Send + 'static, T3: Send + 'static, T4: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut S, T1, T2, T3, T4, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.dispatch = self.dispatch.add_handler4(name, f)?;
        Ok(self)
    }

    /// Freeze the dispatch table and hand the parts to `ActorCell::spawn`.
    pub(crate) fn into_parts(self) -> ActorCellParts<S> {
        (self.type_tag, self.state, self.dispatch.build(), self.mailbox_capacity)
    }
}
