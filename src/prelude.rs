//! Convenience re-exports for the common path: build an actor, spawn it
//! under a supervisor, send it messages.
//!
//! ```
//! use airssys_rt::prelude::*;
//! ```

pub use crate::actor::{ActorCell, ActorCellBuilder};
pub use crate::dispatch::{DispatchContext, DispatchOutcome, DispatchTable, DispatchTableBuilder};
pub use crate::executor::{Device, Executable, Executor};
pub use crate::mailbox::{EnqueueOutcome, Mailbox};
pub use crate::message::{
    send, send_high, Address, Dispatchable, Header, IntoPayload, Message, Payload, Priority,
};
pub use crate::monitoring::{DynMonitor, Monitor, NoopMonitor, RuntimeEvent};
pub use crate::supervisor::Supervisor;
pub use crate::system::{ExecutorConfig, RuntimeError, SystemConfig};
pub use crate::util::{ActorId, MessageId};
