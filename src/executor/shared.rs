//! State shared between the `Executor` handle and its running `Device`s.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use crossbeam_deque::Stealer;

use super::executable::Executable;
use crate::monitoring::DynMonitor;
use crate::system::ExecutorConfig;

pub(crate) struct ExecutorShared {
    pub(crate) config: ExecutorConfig,
    pub(crate) stealers: Vec<Stealer<Arc<dyn Executable>>>,
    pub(crate) overflow_tx: Sender<Arc<dyn Executable>>,
    pub(crate) overflow_rx: Receiver<Arc<dyn Executable>>,
    pub(crate) stopped: AtomicBool,
    pub(crate) monitor: DynMonitor,
}

/// Placement policy shared by `Executor::execute` and `Device::submit`
/// (§4.5): push onto the calling thread's local deque if it is a Device,
/// else onto the overflow queue.
pub(crate) fn place(shared: &ExecutorShared, exe: Arc<dyn Executable>) {
    if exe.is_blocked() {
        tracing::debug!("refusing to schedule a blocking executable");
        return;
    }
    if shared.stopped.load(std::sync::atomic::Ordering::Acquire) {
        return;
    }

    let mut leftover = Some(exe);
    super::device::LOCAL_WORKER.with(|cell| {
        if let Some(worker) = cell.borrow().as_ref() {
            if let Some(exe) = leftover.take() {
                worker.push(exe);
            }
        }
    });
    if let Some(exe) = leftover {
        let _ = shared.overflow_tx.send(exe);
    }
}
