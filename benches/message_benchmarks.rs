//! Message passing benchmarks.
//!
//! Measures baseline performance of message construction and mailbox
//! operations:
//! - Point-to-point send through a live actor
//! - Sustained send throughput (100 messages)
//! - Fan-out to 10 sibling actors
//! - Raw mailbox enqueue/pop operations, bypassing dispatch

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

// Layer 1: Standard library imports
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party crate imports
use criterion::{criterion_group, criterion_main, Criterion};

// Layer 3: Internal module imports
use airssys_rt::actor::ActorCellBuilder;
use airssys_rt::executor::Executor;
use airssys_rt::mailbox::Mailbox;
use airssys_rt::message::{send, Message, Payload, Priority};
use airssys_rt::monitoring::NoopMonitor;
use airssys_rt::supervisor::Supervisor;
use airssys_rt::system::ExecutorConfig;

struct Sink;

fn test_executor(threads: usize) -> Arc<Executor> {
    let config = ExecutorConfig::builder().with_threads(threads).build().unwrap();
    let executor = Arc::new(Executor::new(config, Arc::new(NoopMonitor::new())));
    executor.start().unwrap();
    executor
}

/// Benchmark: a single send through a live actor's full mailbox ->
/// executor -> dispatch path.
fn message_send_single(c: &mut Criterion) {
    let executor = test_executor(1);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));
    let address = root.spawn_actor(|| {
        ActorCellBuilder::new("sink", Sink)
            .add_handler0("ping", |_actor, _ctx| {})
            .unwrap()
    });

    c.bench_function("message_send_single", |b| {
        b.iter(|| {
            send(&address, "ping", ());
        });
    });

    std::thread::sleep(Duration::from_millis(100));
    executor.stop().unwrap();
}

/// Benchmark: sustained send throughput, 100 messages per iteration.
fn message_send_throughput(c: &mut Criterion) {
    let executor = test_executor(2);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));
    let address = root.spawn_actor(|| {
        ActorCellBuilder::new("sink", Sink)
            .add_handler0("ping", |_actor, _ctx| {})
            .unwrap()
    });

    c.bench_function("message_send_throughput", |b| {
        b.iter(|| {
            for _ in 0..100 {
                send(&address, "ping", ());
            }
        });
    });

    std::thread::sleep(Duration::from_millis(200));
    executor.stop().unwrap();
}

/// Benchmark: fan-out a single send to 10 sibling actors.
fn message_fan_out_small(c: &mut Criterion) {
    let executor = test_executor(2);
    let root = Supervisor::root(Arc::clone(&executor), Arc::new(NoopMonitor::new()));
    let addresses: Vec<_> = (0..10)
        .map(|i| {
            root.spawn_actor(|| {
                ActorCellBuilder::new(format!("sink-{i}"), Sink)
                    .add_handler0("ping", |_actor, _ctx| {})
                    .unwrap()
            })
        })
        .collect();

    c.bench_function("message_fan_out_small", |b| {
        b.iter(|| {
            for address in &addresses {
                send(address, "ping", ());
            }
        });
    });

    std::thread::sleep(Duration::from_millis(100));
    executor.stop().unwrap();
}

/// Benchmark: raw mailbox enqueue/pop, bypassing dispatch entirely.
fn mailbox_operations(c: &mut Criterion) {
    c.bench_function("mailbox_operations", |b| {
        b.iter(|| {
            let mailbox = Mailbox::unbounded();
            for i in 0..100 {
                let address = dummy_address();
                let msg = Message::new(
                    address,
                    None,
                    format!("msg-{i}"),
                    Priority::Normal,
                    Payload::empty(),
                );
                mailbox.enqueue(msg);
            }
            let mut drained = 0;
            while mailbox.pop_one().is_some() {
                drained += 1;
            }
            black_box(drained);
        });
    });
}

fn dummy_address() -> airssys_rt::message::Address {
    use airssys_rt::message::{Address, Dispatchable};
    use airssys_rt::util::ActorId;

    struct Void;
    impl Dispatchable for Void {
        fn deliver(&self, _msg: Message) {}
        fn actor_id(&self) -> ActorId {
            ActorId::next()
        }
    }

    let target: Arc<dyn Dispatchable> = Arc::new(Void);
    Address::new("void", &target)
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .without_plots()
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets =
        message_send_single,
        message_send_throughput,
        message_fan_out_small,
        mailbox_operations
}

criterion_main!(benches);
