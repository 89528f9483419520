//! # airssys-rt — in-process actor runtime
//!
//! A library that lets an application decompose work into isolated
//! computations ("actors") that communicate only by asynchronous messages,
//! executed on a fixed pool of worker threads under a fair, work-sharing
//! scheduler.
//!
//! The host writes actor state and registers handlers by name on an
//! [`actor::ActorCellBuilder`], spawns the result under a
//! [`supervisor::Supervisor`], and fire-and-forgets messages at the
//! returned [`message::Address`] with [`message::send`]. The runtime
//! multiplexes actor execution onto [`executor::Device`] threads,
//! guarantees each actor drains its own [`mailbox::Mailbox`] sequentially,
//! and decouples an actor's identity from its lifetime via
//! [`message::Address`], which never keeps the actor alive.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use airssys_rt::actor::ActorCellBuilder;
//! use airssys_rt::executor::Executor;
//! use airssys_rt::message::send;
//! use airssys_rt::monitoring::NoopMonitor;
//! use airssys_rt::supervisor::Supervisor;
//! use airssys_rt::system::ExecutorConfig;
//!
//! struct Counter {
//!     hits: u64,
//! }
//!
//! let config = ExecutorConfig::builder().with_threads(2).build().expect("valid config");
//! let monitor = Arc::new(NoopMonitor::new());
//! let executor = Arc::new(Executor::new(config, monitor.clone()));
//! executor.start().expect("executor starts");
//!
//! let root = Supervisor::root(Arc::clone(&executor), monitor);
//! let address = root.spawn_actor(|| {
//!     ActorCellBuilder::new("counter", Counter { hits: 0 })
//!         .add_handler0("increment", |actor, _ctx| actor.hits += 1)
//!         .expect("register increment")
//! });
//!
//! send(&address, "increment", ());
//! std::thread::sleep(Duration::from_millis(50));
//! executor.stop().expect("executor stops");
//! ```
//!
//! # Module organization
//!
//! - [`message`] — [`message::Address`], [`message::Message`], its header,
//!   and the type-erased [`message::Payload`] carrying a handler's
//!   arguments (§3).
//! - [`mailbox`] — the two-priority, single-consumer [`mailbox::Mailbox`]
//!   every actor owns (§4.1).
//! - [`dispatch`] — the per-actor `command -> typed handler`
//!   [`dispatch::DispatchTable`] (§4.2).
//! - [`actor`] — [`actor::ActorCell`], the behavioral unit built from an
//!   [`actor::ActorCellBuilder`] (§4.3).
//! - [`supervisor`] — [`supervisor::Supervisor`], which owns child actors
//!   and sub-supervisors and routes messages to them by address (§4.4).
//! - [`executor`] — the work-sharing scheduler: [`executor::Executor`]'s
//!   fleet of [`executor::Device`]s, and the [`executor::Executable`]
//!   contract both `ActorCell` and `Supervisor` implement (§4.5).
//! - [`monitoring`] — the injected [`monitoring::Monitor`] side-channel for
//!   the silent per-message observations the core never surfaces as errors
//!   — routing misses, decoding misses, dropped mailboxes (§3.2, §7).
//! - [`system`] — process-wide [`system::SystemConfig`] /
//!   [`system::ExecutorConfig`], validated via their builders, and the
//!   construction-time [`system::RuntimeError`].
//! - [`util`] — [`util::ActorId`] / [`util::MessageId`] allocation.
//!
//! # Non-goals
//!
//! This is not a distributed actor system: no network transport, no remote
//! addressing, no serialization of messages across a wire, no persistence,
//! no fault-tolerance beyond clean teardown. Supervision here means
//! ownership and routing, not restart policies — a dropped `Supervisor`
//! tears its children down in reverse insertion order; nothing watches a
//! child for failure and relaunches it.

pub mod actor;
pub mod dispatch;
pub mod executor;
pub mod mailbox;
pub mod message;
pub mod monitoring;
pub mod prelude;
pub mod supervisor;
pub mod system;
pub mod util;

pub use actor::{ActorCell, ActorCellBuilder};
pub use dispatch::{DispatchContext, DispatchOutcome, DispatchTable, DispatchTableBuilder};
pub use executor::{Device, Executable, Executor};
pub use mailbox::{EnqueueOutcome, Mailbox};
pub use message::{
    send, send_high, Address, Dispatchable, Header, IntoPayload, Message, ParamDescriptor,
    Payload, Priority,
};
pub use monitoring::{
    DispatchEvent, DynMonitor, ExecutorEvent, InMemoryMonitor, MailboxEvent, Monitor,
    MonitoringConfig, NoopMonitor, RoutingEvent, RuntimeEvent,
};
pub use supervisor::Supervisor;
pub use system::{ExecutorConfig, RuntimeError, SystemConfig};
pub use util::{ActorId, MessageId};
