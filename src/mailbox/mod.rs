//! Mailbox: the two-priority, single-consumer queue attached to every actor.
//!
//! A [`Mailbox`] owns two FIFO queues (normal, high) behind one lock and a
//! `scheduled` flag that the owning actor and the executor use to agree on
//! at-most-one concurrent `run` (§4.1, §5).

pub mod queue;

pub use queue::{EnqueueOutcome, Mailbox};
