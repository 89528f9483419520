//! The per-actor `string -> Handler` dispatch table (§4.2).

// Layer 1: Standard library imports
use std::collections::HashMap;

// Layer 3: Internal module imports
use super::context::DispatchContext;
use super::handler::{handler0, handler1, handler2, handler3, handler4, Handler};
use crate::message::{Message, ParamDescriptor};
use crate::system::errors::RuntimeError;

/// What happened when a message was run through a [`DispatchTable`].
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The handler ran.
    Invoked,
    /// No handler registered under this command (§7: routing miss).
    Unhandled,
    /// A handler exists, but the payload's arity/types don't match what it
    /// declared (§7: decoding miss).
    BadMessage {
        /// Types the handler declared at registration.
        expected: Vec<ParamDescriptor>,
        /// Types actually carried by the payload.
        actual: Vec<ParamDescriptor>,
    },
}

/// Builds a [`DispatchTable`]. Only available during actor construction —
/// once `build()` is called the resulting table exposes no further mutation
/// method, matching §3's "insertion only allowed during actor construction;
/// after the actor first runs, the table is read-only".
pub struct DispatchTableBuilder<A> {
    handlers: HashMap<String, Handler<A>>,
}

impl<A: 'static> DispatchTableBuilder<A> {
    /// An empty builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    fn insert(&mut self, name: &str, handler: Handler<A>) -> Result<(), RuntimeError> {
        if self.handlers.contains_key(name) {
            return Err(RuntimeError::DuplicateHandler {
                command: name.to_string(),
            });
        }
        self.handlers.insert(name.to_string(), handler);
        Ok(())
    }

    /// Register a zero-argument handler under `name`.
    pub fn add_handler0(
        mut self,
        name: &str,
        f: impl Fn(&mut A, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.insert(name, handler0(f))?;
        Ok(self)
    }

    /// Register a one-argument handler under `name`.
    pub fn add_handler1<T1: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut A, T1, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.insert(name, handler1(f))?;
        Ok(self)
    }

    /// Register a two-argument handler under `name`.
    pub fn add_handler2<T1: Send + 'static, T2: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut A, T1, T2, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.insert(name, handler2(f))?;
        Ok(self)
    }

    /// Register a three-argument handler under `name`.
    pub fn add_handler3<T1: Send + 'static, T2: Send + 'static, T3: Send + 'static>(
        mut self,
        name: &str,
        f: impl Fn(&mut A, T1, T2, T3, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.insert(name, handler3(f))?;
        Ok(self)
    }

    /// Register a four-argument handler under `name`.
    pub fn add_handler4<
        T1: Send + 'static,
        T2: Send + 'static,
        T3: Send + 'static,
        T4: Send + 'static,
    >(
        mut self,
        name: &str,
        f: impl Fn(&mut A, T1, T2, T3, T4, &DispatchContext<'_>) + Send + Sync + 'static,
    ) -> Result<Self, RuntimeError> {
        self.insert(name, handler4(f))?;
        Ok(self)
    }

    /// Freeze the builder into a read-only [`DispatchTable`].
    pub fn build(self) -> DispatchTable<A> {
        DispatchTable {
            handlers: self.handlers,
        }
    }
}

impl<A: 'static> Default for DispatchTableBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only `command -> Handler` map. Lookup is O(1) expected.
pub struct DispatchTable<A> {
    handlers: HashMap<String, Handler<A>>,
}

impl<A> DispatchTable<A> {
    /// Look up and, if the payload matches, invoke the handler for `msg`'s
    /// command. Consumes the message.
    pub fn dispatch(&self, actor: &mut A, msg: Message, ctx: &DispatchContext<'_>) -> DispatchOutcome {
        let (header, payload) = msg.into_parts();
        let Some(handler) = self.handlers.get(header.command()) else {
            return DispatchOutcome::Unhandled;
        };
        let actual = payload.actual_descriptors();
        let matches = actual.len() == handler.descriptors.len()
            && actual.iter().zip(handler.descriptors.iter()).all(|(a, e)| a == e);
        if !matches {
            return DispatchOutcome::BadMessage {
                expected: handler.descriptors.clone(),
                actual,
            };
        }
        handler.call(actor, payload, ctx);
        DispatchOutcome::Invoked
    }

    /// Whether `command` has a registered handler.
    pub fn contains(&self, command: &str) -> bool {
        self.handlers.contains_key(command)
    }
}
