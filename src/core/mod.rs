//! Core module: Lock-Free SPSC Ring Buffer
//!
//! Prinsip desain:
//! - Lock-Free: Hanya atomic operations, tidak ada Mutex/RwLock
//! - No-Allocation: Backing store dialokasikan sekali saat init,
//!   tidak pernah resize
//! - Non-Blocking: Backpressure (penuh) dan starvation (kosong)
//!   dilaporkan sebagai return value, bukan dengan blocking

mod ring_buffer;

pub use ring_buffer::RingBuffer;
