//! Supervisor: an actor that additionally owns child actors and
//! sub-supervisors and routes messages to them by address (§4.4).
//!
//! Supervision here means ownership and routing, not restart policies — a
//! dropped supervisor tears down its children in reverse insertion order
//! (§5 "Teardown"); nothing in this crate watches a child for failure and
//! relaunches it.

mod cell;

pub use cell::Supervisor;
