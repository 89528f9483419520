//! Message system: header, type-erased payload, and the non-owning
//! [`Address`] handle used to route both.

pub mod address;
pub mod envelope;
pub mod payload;
pub mod priority;
pub mod send;

pub use address::{Address, Dispatchable};
pub use envelope::{Header, Message};
pub use payload::{IntoPayload, ParamDescriptor, Payload};
pub use priority::Priority;
pub use send::{send, send_high};
