//! Criterion benchmark untuk Ring Buffer
//!
//! Run dengan: cargo bench

use caduceus::RingBuffer;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    // Benchmark push
    group.bench_function("push", |b| {
        let rb: RingBuffer<u64> = RingBuffer::new(65536);
        let mut i = 0u64;
        b.iter(|| {
            if !rb.push(black_box(i)) {
                rb.pop();
                rb.push(black_box(i));
            }
            i = i.wrapping_add(1);
        });
    });

    // Benchmark pop
    group.bench_function("pop", |b| {
        let rb: RingBuffer<u64> = RingBuffer::new(65536);
        // Pre-fill
        for i in 0..32768 {
            rb.push(i);
        }
        b.iter(|| {
            if let Some(v) = rb.pop() {
                rb.push(black_box(v));
            }
        });
    });

    // Benchmark push+pop cycle
    group.bench_function("push_pop_cycle", |b| {
        let rb: RingBuffer<u64> = RingBuffer::new(65536);
        let mut i = 0u64;
        b.iter(|| {
            rb.push(black_box(i));
            let _ = rb.pop();
            i = i.wrapping_add(1);
        });
    });

    // Benchmark front (peek tanpa cursor movement)
    group.bench_function("front", |b| {
        let rb: RingBuffer<u64> = RingBuffer::new(65536);
        rb.push(42);
        b.iter(|| black_box(rb.front()));
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // Batch operations
    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("batch_{}", batch_size), |b| {
            let rb: RingBuffer<u64> = RingBuffer::new(65536);
            b.iter(|| {
                for i in 0..*batch_size {
                    rb.push(black_box(i as u64));
                }
                for _ in 0..*batch_size {
                    black_box(rb.pop());
                }
            });
        });
    }

    group.finish();
}

fn bench_spsc_cross_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc");

    // Producer dan consumer di thread terpisah, busy-poll di kedua sisi
    group.bench_function("cross_thread", |b| {
        b.iter_custom(|iters| {
            let rb: Arc<RingBuffer<u64>> = Arc::new(RingBuffer::new(4096));
            let producer_rb = Arc::clone(&rb);

            let producer = thread::spawn(move || {
                for i in 0..iters {
                    while !producer_rb.push(i) {
                        std::hint::spin_loop();
                    }
                }
            });

            let start = Instant::now();
            for _ in 0..iters {
                loop {
                    if let Some(v) = rb.pop() {
                        black_box(v);
                        break;
                    }
                    std::hint::spin_loop();
                }
            }
            let elapsed = start.elapsed();

            producer.join().unwrap();
            elapsed
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_throughput,
    bench_spsc_cross_thread
);
criterion_main!(benches);
