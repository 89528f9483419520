//! The abstract unit the scheduler runs (§2, §9).

use std::sync::Arc;

use super::device::Device;

/// Anything an [`super::Executor`] can place on a queue and run.
///
/// `ActorCell` and `Supervisor` are the only implementors in this crate, but
/// the trait is public so a host can enqueue its own runnable work onto the
/// same device fleet.
///
/// Queue slots hold `Arc<dyn Executable>`; `run` takes `self: Arc<Self>` so
/// an implementation can clone its own handle and hand it back to
/// [`Device::submit`] for re-scheduling without needing a second way to
/// reach "an `Arc` pointing at myself" (§9's refcount-per-queue-slot model).
pub trait Executable: Send + Sync {
    /// Drains up to `max_throughput` units of work, dispatching each.
    fn run(self: Arc<Self>, device: &Device<'_>, max_throughput: usize);

    /// Blocking executables (§4.3.1) are never placed on the executor's
    /// queues; the default is non-blocking.
    fn is_blocked(&self) -> bool {
        false
    }
}
