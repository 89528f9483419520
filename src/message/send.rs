//! The top-level fire-and-forget entry point (§6: `send(target, command,
//! args…)`).

// Layer 3: Internal module imports
use super::address::Address;
use super::envelope::Message;
use super::payload::IntoPayload;
use super::priority::Priority;

/// Construct `command(args)`, normal priority, and hand it to `target`'s
/// mailbox.
///
/// Host code outside any actor calls this directly; a running handler
/// should prefer [`crate::dispatch::DispatchContext::send`] instead, which
/// tags the outgoing message with the actual sending actor's address rather
/// than the recipient's own. A dead `target` drops the message silently
/// (§7: fire-and-forget semantics).
pub fn send<P: IntoPayload>(target: &Address, command: impl Into<String>, args: P) {
    send_with_priority(target, command, args, Priority::Normal);
}

/// As [`send`], but enqueued at high priority.
pub fn send_high<P: IntoPayload>(target: &Address, command: impl Into<String>, args: P) {
    send_with_priority(target, command, args, Priority::High);
}

fn send_with_priority<P: IntoPayload>(
    target: &Address,
    command: impl Into<String>,
    args: P,
    priority: Priority,
) {
    let msg = Message::new(target.clone(), None, command, priority, args.into_payload());
    target.deliver(msg);
}
