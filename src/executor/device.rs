//! One OS thread, one local work-stealing deque (§4.5).

use std::cell::RefCell;
use std::sync::Arc;

use crossbeam_deque::Worker;

use super::executable::Executable;
use super::shared::{place, ExecutorShared};

thread_local! {
    /// The local deque of whichever Device is currently running on this
    /// thread, if any. Populated for the lifetime of `device_loop`; absent
    /// on any other thread, which is how `place` tells a worker thread
    /// apart from an external caller (§4.5 placement policy).
    pub(super) static LOCAL_WORKER: RefCell<Option<Worker<Arc<dyn Executable>>>> =
        const { RefCell::new(None) };
}

/// Handle passed to [`Executable::run`] identifying which Device is driving
/// this call, and exposing the submission path a re-scheduled actor needs.
pub struct Device<'a> {
    index: usize,
    shared: &'a Arc<ExecutorShared>,
}

impl<'a> Device<'a> {
    pub(crate) fn new(index: usize, shared: &'a Arc<ExecutorShared>) -> Self {
        Self { index, shared }
    }

    /// Index of this Device within the executor's fleet.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Submit an Executable using the same placement policy as
    /// [`super::Executor::execute`].
    pub fn submit(&self, exe: Arc<dyn Executable>) {
        place(self.shared, exe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use crossbeam_deque::Worker;
    use std::sync::atomic::AtomicBool;

    struct Noop;
    impl Executable for Noop {
        fn run(self: Arc<Self>, _device: &Device<'_>, _max_throughput: usize) {}
    }

    fn test_shared() -> Arc<ExecutorShared> {
        let (tx, rx) = unbounded();
        Arc::new(ExecutorShared {
            config: crate::system::ExecutorConfig::default(),
            stealers: Vec::new(),
            overflow_tx: tx,
            overflow_rx: rx,
            stopped: AtomicBool::new(false),
            monitor: Arc::new(crate::monitoring::NoopMonitor::new()),
        })
    }

    #[test]
    fn submit_outside_a_device_thread_goes_to_overflow() {
        let shared = test_shared();
        let device = Device::new(0, &shared);
        device.submit(Arc::new(Noop));
        assert_eq!(shared.overflow_rx.len(), 1);
    }

    #[test]
    fn submit_inside_a_device_thread_goes_local() {
        let shared = test_shared();
        let worker: Worker<Arc<dyn Executable>> = Worker::new_lifo();
        LOCAL_WORKER.with(|cell| *cell.borrow_mut() = Some(worker));
        let device = Device::new(0, &shared);
        device.submit(Arc::new(Noop));
        let local_len = LOCAL_WORKER.with(|cell| cell.borrow().as_ref().map(Worker::len));
        assert_eq!(local_len, Some(1));
        assert_eq!(shared.overflow_rx.len(), 0);
        LOCAL_WORKER.with(|cell| *cell.borrow_mut() = None);
    }
}
