//! Dispatch table: the per-actor `command name -> typed handler` map (§4.2).

pub mod context;
pub mod handler;
pub mod table;

pub use context::DispatchContext;
pub use table::{DispatchOutcome, DispatchTable, DispatchTableBuilder};
