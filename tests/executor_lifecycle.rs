//! Executor-level invariants (SPEC §8, properties 1, 4, 5, 6): at most one
//! concurrent dispatch per actor, no sends lost under concurrent senders,
//! scheduler liveness across siblings, and clean teardown.

use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use airssys_rt::actor::ActorCellBuilder;
use airssys_rt::executor::Executor;
use airssys_rt::message::send;
use airssys_rt::monitoring::NoopMonitor;
use airssys_rt::supervisor::Supervisor;
use airssys_rt::system::ExecutorConfig;

fn test_executor(threads: usize) -> Arc<Executor> {
    let config = ExecutorConfig::builder()
        .with_threads(threads)
        .build()
        .expect("valid executor config");
    let executor = Arc::new(Executor::new(config, Arc::new(NoopMonitor::new())));
    executor.start().expect("executor starts");
    executor
}

/// Invariant 1: with many senders hammering one actor across several
/// workers, a reentrancy counter bracketing the handler body never
/// observes more than one concurrent invocation.
#[test]
fn at_most_one_concurrent_dispatch_per_actor() {
    let executor = test_executor(8);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));

    struct Reentrant {
        in_flight: Arc<AtomicIsize>,
        max_observed: Arc<AtomicIsize>,
    }

    let in_flight = Arc::new(AtomicIsize::new(0));
    let max_observed = Arc::new(AtomicIsize::new(0));
    let address = root.spawn_actor(|| {
        let in_flight = Arc::clone(&in_flight);
        let max_observed = Arc::clone(&max_observed);
        ActorCellBuilder::new("reentrant", Reentrant { in_flight, max_observed })
            .add_handler0("bump", |actor, _ctx| {
                let now = actor.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                actor.max_observed.fetch_max(now, Ordering::SeqCst);
                std::thread::yield_now();
                actor.in_flight.fetch_sub(1, Ordering::SeqCst);
            })
            .expect("register bump")
    });

    let senders: Vec<_> = (0..8)
        .map(|_| {
            let address = address.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    send(&address, "bump", ());
                }
            })
        })
        .collect();
    for sender in senders {
        sender.join().expect("sender thread does not panic");
    }

    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(max_observed.load(Ordering::SeqCst), 1);
    executor.stop().expect("executor stops");
}

/// Invariant 4: with K senders each sending M messages to one actor, the
/// actor observes exactly K*M dispatches — no sends are lost on an
/// unbounded mailbox under contention.
#[test]
fn no_lost_sends_on_busy_actor() {
    const SENDERS: usize = 6;
    const PER_SENDER: usize = 300;

    let executor = test_executor(4);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));

    struct Counter {
        hits: Arc<AtomicUsize>,
    }
    let hits = Arc::new(AtomicUsize::new(0));
    let address = root.spawn_actor(|| {
        let hits = Arc::clone(&hits);
        ActorCellBuilder::new("counter", Counter { hits })
            .add_handler0("tick", |actor, _ctx| {
                actor.hits.fetch_add(1, Ordering::SeqCst);
            })
            .expect("register tick")
    });

    let senders: Vec<_> = (0..SENDERS)
        .map(|_| {
            let address = address.clone();
            std::thread::spawn(move || {
                for _ in 0..PER_SENDER {
                    send(&address, "tick", ());
                }
            })
        })
        .collect();
    for sender in senders {
        sender.join().expect("sender thread does not panic");
    }

    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(hits.load(Ordering::SeqCst), SENDERS * PER_SENDER);
    executor.stop().expect("executor stops");
}

/// Invariant 5: with two sibling actors under at least two workers, both
/// actors make progress — one actor producing work for the other does not
/// starve either.
#[test]
fn scheduler_liveness_across_siblings() {
    let executor = test_executor(2);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));

    struct Pinger {
        other: Arc<std::sync::OnceLock<airssys_rt::message::Address>>,
        sent: Arc<AtomicUsize>,
    }
    struct Ponger {
        received: Arc<AtomicUsize>,
    }

    let ponger_received = Arc::new(AtomicUsize::new(0));
    let ponger_address = root.spawn_actor(|| {
        let received = Arc::clone(&ponger_received);
        ActorCellBuilder::new("ponger", Ponger { received })
            .add_handler0("pong", |actor, _ctx| {
                actor.received.fetch_add(1, Ordering::SeqCst);
            })
            .expect("register pong")
    });

    let pinger_sent = Arc::new(AtomicUsize::new(0));
    let other_slot: Arc<std::sync::OnceLock<airssys_rt::message::Address>> = Arc::new(std::sync::OnceLock::new());
    other_slot.set(ponger_address.clone()).expect("set once");
    let pinger_address = root.spawn_actor(|| {
        let sent = Arc::clone(&pinger_sent);
        let other = Arc::clone(&other_slot);
        ActorCellBuilder::new("pinger", Pinger { other, sent })
            .add_handler0("ping", |actor, ctx| {
                if let Some(target) = actor.other.get() {
                    ctx.send(target, "pong", ());
                    actor.sent.fetch_add(1, Ordering::SeqCst);
                }
            })
            .expect("register ping")
    });

    for _ in 0..50 {
        send(&pinger_address, "ping", ());
    }

    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(pinger_sent.load(Ordering::SeqCst), 50);
    assert_eq!(ponger_received.load(Ordering::SeqCst), 50);
    executor.stop().expect("executor stops");
}

/// Invariant 6: after `stop()` returns (all Device threads joined), no
/// handler runs subsequently even if further sends are attempted.
#[test]
fn teardown_stops_further_dispatch() {
    let executor = test_executor(2);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));

    struct Counter {
        hits: Arc<AtomicUsize>,
    }
    let hits = Arc::new(AtomicUsize::new(0));
    let address = root.spawn_actor(|| {
        let hits = Arc::clone(&hits);
        ActorCellBuilder::new("counter", Counter { hits })
            .add_handler0("tick", |actor, _ctx| {
                actor.hits.fetch_add(1, Ordering::SeqCst);
            })
            .expect("register tick")
    });

    send(&address, "tick", ());
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    executor.stop().expect("executor stops");

    send(&address, "tick", ());
    std::thread::sleep(Duration::from_millis(100));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
