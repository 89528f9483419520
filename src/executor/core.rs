//! Fixed-size fleet of Devices plus a shared overflow queue (§4.5).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_deque::{Steal, Stealer, Worker};
use parking_lot::Mutex;
use rand::seq::SliceRandom;

use super::device::{Device, LOCAL_WORKER};
use super::executable::Executable;
use super::shared::{place, ExecutorShared};
use crate::monitoring::{DynMonitor, ExecutorEvent, ExecutorEventKind};
use crate::system::{ExecutorConfig, RuntimeError};

/// How long an idle Device blocks on the overflow queue before rechecking
/// the `stopped` flag (§4.5 step 4, "sleep on a condition until woken").
const PARK_TIMEOUT: Duration = Duration::from_millis(50);

/// Fixed-size fleet of [`Device`]s plus a shared overflow queue; the entry
/// point for enqueuing runnable [`Executable`]s (§2, §4.5).
pub struct Executor {
    config: ExecutorConfig,
    monitor: DynMonitor,
    shared: Mutex<Option<Arc<ExecutorShared>>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

impl Executor {
    /// Construct an executor. Does not spawn any threads until
    /// [`Executor::start`] is called.
    pub fn new(config: ExecutorConfig, monitor: DynMonitor) -> Self {
        Self {
            config,
            monitor,
            shared: Mutex::new(None),
            workers: Mutex::new(Vec::new()),
        }
    }

    /// Scheduler-wide cap on messages an Executable drains per `run`.
    pub fn max_throughput(&self) -> usize {
        self.config.throughput_per_run.get()
    }

    /// Spawn N worker threads, each bound to one Device.
    pub fn start(&self) -> Result<(), RuntimeError> {
        let mut shared_slot = self.shared.lock();
        if shared_slot.is_some() {
            return Err(RuntimeError::ExecutorAlreadyStarted);
        }

        let thread_count = self.config.threads.get();
        let local_workers: Vec<Worker<Arc<dyn Executable>>> =
            (0..thread_count).map(|_| Worker::new_lifo()).collect();
        let stealers: Vec<Stealer<Arc<dyn Executable>>> =
            local_workers.iter().map(Worker::stealer).collect();
        let (overflow_tx, overflow_rx) = crossbeam_channel::unbounded();

        let shared = Arc::new(ExecutorShared {
            config: self.config.clone(),
            stealers,
            overflow_tx,
            overflow_rx,
            stopped: AtomicBool::new(false),
            monitor: Arc::clone(&self.monitor),
        });

        let mut handles = Vec::with_capacity(thread_count);
        for (index, worker) in local_workers.into_iter().enumerate() {
            let device_shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("airssys-rt-device-{index}"))
                .spawn(move || device_loop(index, worker, device_shared));
            match spawned {
                Ok(handle) => handles.push(handle),
                // OS thread spawn failure: unwind any devices already
                // spawned so we don't leak running threads, then report
                // the failure to the caller instead of panicking.
                Err(err) => {
                    tracing::error!(device_index = index, error = %err, "failed to spawn device thread");
                    shared.stopped.store(true, Ordering::Release);
                    for handle in handles {
                        if let Err(panic) = handle.join() {
                            std::panic::resume_unwind(panic);
                        }
                    }
                    return Err(RuntimeError::DeviceSpawnFailed {
                        device_index: index,
                        reason: err.to_string(),
                    });
                }
            }
            shared.monitor.record(
                ExecutorEvent {
                    timestamp: chrono::Utc::now(),
                    event_kind: ExecutorEventKind::DeviceSpawned { device_index: index },
                    metadata: HashMap::new(),
                }
                .into(),
            );
        }

        *self.workers.lock() = handles;
        *shared_slot = Some(shared.clone());
        tracing::info!(threads = thread_count, "executor started");
        shared.monitor.record(
            ExecutorEvent {
                timestamp: chrono::Utc::now(),
                event_kind: ExecutorEventKind::Started {
                    threads: thread_count,
                },
                metadata: HashMap::new(),
            }
            .into(),
        );
        Ok(())
    }

    /// Set `stopped`, wake all workers, and join their threads.
    ///
    /// Does not wait for mailboxes to drain (§4.6): in-flight runs finish,
    /// queued-but-not-running work is dropped.
    pub fn stop(&self) -> Result<(), RuntimeError> {
        let shared = {
            let mut shared_slot = self.shared.lock();
            shared_slot.take().ok_or(RuntimeError::ExecutorNotStarted)?
        };
        shared.stopped.store(true, Ordering::Release);

        let handles = std::mem::take(&mut *self.workers.lock());
        for handle in handles {
            if let Err(panic) = handle.join() {
                std::panic::resume_unwind(panic);
            }
        }

        tracing::info!("executor stopped");
        shared.monitor.record(
            ExecutorEvent {
                timestamp: chrono::Utc::now(),
                event_kind: ExecutorEventKind::Stopped,
                metadata: HashMap::new(),
            }
            .into(),
        );
        Ok(())
    }

    /// Submit a runnable Executable (§4.5 placement policy).
    ///
    /// `place` itself refuses a blocking-variant Executable (§4.3.1) instead
    /// of silently placing it on a queue no host loop is draining from.
    pub fn execute(&self, exe: Arc<dyn Executable>) -> Result<(), RuntimeError> {
        let shared_slot = self.shared.lock();
        let shared = shared_slot.as_ref().ok_or(RuntimeError::ExecutorNotStarted)?;
        place(shared, exe);
        Ok(())
    }
}

fn steal_from_random_peer(
    stealers: &[Stealer<Arc<dyn Executable>>],
    self_index: usize,
) -> Option<(usize, Arc<dyn Executable>)> {
    let mut order: Vec<usize> = (0..stealers.len()).filter(|&i| i != self_index).collect();
    order.shuffle(&mut rand::thread_rng());
    for victim in order {
        loop {
            match stealers[victim].steal() {
                Steal::Success(exe) => return Some((victim, exe)),
                Steal::Empty => break,
                Steal::Retry => continue,
            }
        }
    }
    None
}

fn device_loop(index: usize, worker: Worker<Arc<dyn Executable>>, shared: Arc<ExecutorShared>) {
    LOCAL_WORKER.with(|cell| *cell.borrow_mut() = Some(worker));

    loop {
        if shared.stopped.load(Ordering::Acquire) {
            break;
        }

        let local_task = LOCAL_WORKER.with(|cell| cell.borrow().as_ref().and_then(Worker::pop));
        let task = local_task.or_else(|| shared.overflow_rx.try_recv().ok()).or_else(|| {
            if !shared.config.stealing {
                return None;
            }
            let (victim, exe) = steal_from_random_peer(&shared.stealers, index)?;
            shared.monitor.record(
                ExecutorEvent {
                    timestamp: chrono::Utc::now(),
                    event_kind: ExecutorEventKind::WorkStolen { thief: index, victim },
                    metadata: HashMap::new(),
                }
                .into(),
            );
            Some(exe)
        });

        match task {
            Some(exe) => {
                let device = Device::new(index, &shared);
                let max_throughput = shared.config.throughput_per_run.get();
                exe.run(&device, max_throughput);
            }
            None => {
                let _ = shared.overflow_rx.recv_timeout(PARK_TIMEOUT);
            }
        }
    }

    LOCAL_WORKER.with(|cell| *cell.borrow_mut() = None);
}
