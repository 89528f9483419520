//! The capability a running handler is given to send further messages.

// Layer 3: Internal module imports
use crate::message::{Address, IntoPayload, Message, Priority};

/// Passed to every handler invocation. A handler never gets raw access to
/// the executor or to other actors' mailboxes — only `send`, which always
/// just enqueues (§4.2: "sends never run handlers inline").
pub struct DispatchContext<'a> {
    self_address: &'a Address,
}

impl<'a> DispatchContext<'a> {
    pub(crate) fn new(self_address: &'a Address) -> Self {
        Self { self_address }
    }

    /// This actor's own address, for self-sends and for handing out to
    /// collaborators.
    pub fn address(&self) -> &Address {
        self.self_address
    }

    /// Enqueue `command(args)` at `target`, normal priority.
    pub fn send<P: IntoPayload>(&self, target: &Address, command: impl Into<String>, args: P) {
        self.send_with_priority(target, command, args, Priority::Normal)
    }

    /// Enqueue `command(args)` at `target`, high priority.
    pub fn send_high<P: IntoPayload>(&self, target: &Address, command: impl Into<String>, args: P) {
        self.send_with_priority(target, command, args, Priority::High)
    }

    fn send_with_priority<P: IntoPayload>(
        &self,
        target: &Address,
        command: impl Into<String>,
        args: P,
        priority: Priority,
    ) {
        let msg = Message::new(
            self.self_address.clone(),
            None,
            command,
            priority,
            args.into_payload(),
        );
        target.deliver(msg);
    }
}
