//! SPSC Demo - Producer/Consumer dengan Poll + Backoff
//!
//! Demonstrasi pola pemakaian yang benar: core-nya non-blocking, jadi
//! blocking semantics (tunggu sampai ada slot / ada data) dibangun caller
//! sendiri lewat polling loop dengan backoff.
//!
//! Usage:
//!   cargo run --release --example spsc_demo -- [options]
//!
//! Options:
//!   --items <N>      Jumlah item yang dikirim (default: 1000000)
//!   --capacity <N>   Kapasitas ring buffer (default: 1024)

use caduceus::RingBuffer;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() {
    let mut items: u64 = 1_000_000;
    let mut capacity: usize = 1024;

    // Parse args
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--items" if i + 1 < args.len() => {
                items = args[i + 1].parse().unwrap_or(items);
                i += 2;
            }
            "--capacity" if i + 1 < args.len() => {
                capacity = args[i + 1].parse().unwrap_or(capacity);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    println!("🚀 Caduceus SPSC Demo");
    println!("=====================");
    println!("  Items:    {}", items);
    println!("  Capacity: {}\n", capacity);

    let rb: Arc<RingBuffer<u64>> = Arc::new(RingBuffer::new(capacity));
    let producer_rb = Arc::clone(&rb);

    let start = Instant::now();

    // Producer: push non-blocking, yield saat penuh
    let producer = thread::spawn(move || {
        let mut retries = 0u64;
        for i in 0..items {
            while !producer_rb.push(i) {
                retries += 1;
                thread::yield_now();
            }
        }
        retries
    });

    // Consumer: pop non-blocking, yield saat kosong
    let mut received = 0u64;
    let mut sum = 0u64;
    let mut retries = 0u64;
    while received < items {
        match rb.pop() {
            Some(v) => {
                sum = sum.wrapping_add(v);
                received += 1;
            }
            None => {
                retries += 1;
                thread::yield_now();
            }
        }
    }

    let push_retries = producer.join().expect("producer panicked");
    let duration = start.elapsed();

    // Checksum: sum 0..items
    let expected_sum = items * (items - 1) / 2;

    println!("📊 RESULTS");
    println!("==========");
    println!("  Duration:     {:.2}ms", duration.as_secs_f64() * 1000.0);
    println!(
        "  Throughput:   {:.2} M items/sec",
        items as f64 / duration.as_secs_f64() / 1_000_000.0
    );
    println!("  Push retries: {} (buffer full)", push_retries);
    println!("  Pop retries:  {} (buffer empty)", retries);

    if sum == expected_sum && rb.is_empty() {
        println!("\n✅ All {} items delivered in order, buffer empty", items);
    } else {
        println!("\n⚠️  CHECKSUM MISMATCH - expected {}, got {}", expected_sum, sum);
        std::process::exit(1);
    }
}
