//! Caduceus - Lock-Free SPSC Ring Buffer
//!
//! Antrian FIFO bounded untuk tepat satu producer thread dan satu
//! consumer thread, tanpa lock:
//! - Lock-Free: Atomic-only cursors, tidak ada Mutex/RwLock
//! - No-Allocation: Backing store pre-allocated saat init
//! - Non-Blocking: push/pop langsung return, penuh/kosong dilaporkan
//!   sebagai return value biasa

pub mod core;

pub use crate::core::RingBuffer;
