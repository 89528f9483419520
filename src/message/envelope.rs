//! Message header and the envelope that couples it to a payload.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use super::address::Address;
use super::payload::Payload;
use super::priority::Priority;
use crate::util::ids::MessageId;

/// Everything about a message except its arguments.
#[derive(Debug, Clone)]
pub struct Header {
    id: MessageId,
    sender: Address,
    recipient: Option<Address>,
    command: String,
    priority: Priority,
}

impl Header {
    /// Id allocated for this message, for tracing.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Address of the actor that sent this message.
    pub fn sender(&self) -> &Address {
        &self.sender
    }

    /// Explicit recipient override, used by supervisor routing (§4.4). When
    /// absent, the message is addressed to whichever mailbox it was
    /// enqueued into.
    pub fn recipient(&self) -> Option<&Address> {
        self.recipient.as_ref()
    }

    /// The command name looked up in the dispatch table.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Delivery priority.
    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// A single message: a [`Header`] plus its type-erased [`Payload`].
///
/// Messages are single-consumer and move-only: once popped out of a
/// mailbox, only the draining actor ever sees it.
#[derive(Debug)]
pub struct Message {
    header: Header,
    payload: Payload,
}

impl Message {
    /// Construct a message addressed from `sender`, optionally pinned to a
    /// specific `recipient` (used when a supervisor forwards to a child).
    pub fn new(
        sender: Address,
        recipient: Option<Address>,
        command: impl Into<String>,
        priority: Priority,
        payload: Payload,
    ) -> Self {
        Self {
            header: Header {
                id: MessageId::next(),
                sender,
                recipient,
                command: command.into(),
                priority,
            },
            payload,
        }
    }

    /// The message header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Split the message into its header and payload, consuming it. This is
    /// what the dispatcher calls right before invoking a handler.
    pub fn into_parts(self) -> (Header, Payload) {
        (self.header, self.payload)
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

    fn dummy_address() -> Address {
        let sink: Arc<dyn Dispatchable> = Arc::new(Noop(ActorId::next()));
        Address::new("noop", &sink)
    }

    #[test]
    fn header_roundtrips_command_and_priority() {
        let msg = Message::new(
            dummy_address(),
            None,
            "search",
            Priority::High,
            Payload::empty(),
        );
        assert_eq!(msg.header().command(), "search");
        assert_eq!(msg.header().priority(), Priority::High);
        assert!(msg.header().recipient().is_none());
    }

    #[test]
    fn message_ids_differ() {
        let m1 = Message::new(dummy_address(), None, "a", Priority::Normal, Payload::empty());
        let m2 = Message::new(dummy_address(), None, "a", Priority::Normal, Payload::empty());
        assert_ne!(m1.header().id(), m2.header().id());
    }
}
