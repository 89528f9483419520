//! The actor: a mailbox, a dispatch table over owned state, and an address
//! (§3, §4.3).
//!
//! An actor never exists bare — it is always an [`ActorCell<S>`] built from
//! an [`ActorCellBuilder<S>`] and spawned through a
//! [`crate::supervisor::Supervisor`], which keeps the owning `Arc` and hands
//! the caller back only the [`crate::message::Address`].

mod builder;
mod cell;
pub(crate) mod core;

pub(crate) use builder::ActorCellParts;
pub use builder::ActorCellBuilder;
pub use cell::ActorCell;
