//! # Executor module
//!
//! The work-sharing scheduler (§4.5, §6): a fixed fleet of [`Device`]s, each
//! one OS thread driving one local [`crossbeam_deque`] work-stealing deque,
//! backed by a shared overflow queue for work placed from outside any
//! Device thread.
//!
//! [`Executable`] is the abstract unit the fleet runs; [`ActorCell`] and
//! [`Supervisor`] are its only implementors in this crate; [`Executor`] is
//! the handle a host starts, submits work to, and stops.
//!
//! [`ActorCell`]: crate::actor::ActorCell
//! [`Supervisor`]: crate::supervisor::Supervisor

mod core;
mod device;
mod executable;
mod shared;

pub use core::Executor;
pub use device::Device;
pub use executable::Executable;
