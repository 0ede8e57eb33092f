//! Lock-Free Single-Producer Single-Consumer (SPSC) Ring Buffer
//!
//! Implementasi menggunakan Lamport Queue dengan memory ordering yang tepat.
//! Tidak ada Mutex, tidak ada alokasi setelah inisialisasi. Kapasitas
//! ditentukan saat runtime; satu slot dicadangkan sebagai sentinel untuk
//! membedakan kondisi penuh dan kosong tanpa counter terpisah.

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Slot dalam ring buffer - menyimpan satu elemen
#[repr(C, align(64))] // Cache line alignment untuk menghindari false sharing
struct Slot<T> {
    data: UnsafeCell<MaybeUninit<T>>,
}

impl<T> Slot<T> {
    const fn new() -> Self {
        Self {
            data: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }
}

/// Padding untuk cache line isolation (64 bytes pada x86-64)
#[repr(C, align(64))]
struct CacheLinePadded<T> {
    value: T,
}

impl<T> CacheLinePadded<T> {
    const fn new(value: T) -> Self {
        Self { value }
    }
}

/// Lock-Free SPSC Ring Buffer
///
/// Backing store berukuran `capacity + 1` slot. Write cursor hanya
/// dimutasi producer, read cursor hanya dimutasi consumer; keduanya
/// dibaca kedua sisi dan ditempatkan di cache line terpisah untuk
/// menghindari false sharing.
///
/// Invariant: jumlah elemen logis = `(write - read) mod (capacity + 1)`.
/// Karena satu slot permanen jadi sentinel gap, buffer tidak pernah
/// melaporkan penuh dan kosong sekaligus (kecuali kapasitas 0, yang
/// memang permanen kosong).
///
/// # Kontrak SPSC
/// Tepat satu thread boleh memanggil `push` (producer), dan tepat satu
/// thread boleh memanggil `pop`/`front` (consumer). Disiplin ini tidak
/// dideteksi saat runtime - melanggarnya adalah data race (undefined
/// behavior). Sharing antar thread lewat `Arc`.
#[repr(C)]
pub struct RingBuffer<T> {
    // Producer side - cache line aligned
    write_idx: CacheLinePadded<AtomicUsize>,
    // Consumer side - cache line aligned
    read_idx: CacheLinePadded<AtomicUsize>,
    // Pre-allocated buffer di heap: capacity + 1 slot, tidak pernah resize
    buffer: Box<[Slot<T>]>,
}

// SAFETY: RingBuffer aman untuk Send/Sync karena:
// - Hanya satu producer (menulis write_idx)
// - Hanya satu consumer (menulis read_idx)
// - Atomic acquire/release menjamin visibility isi slot
unsafe impl<T: Send> Send for RingBuffer<T> {}
unsafe impl<T: Send> Sync for RingBuffer<T> {}

impl<T: Copy> RingBuffer<T> {
    /// Membuat ring buffer baru dengan kapasitas `capacity` elemen.
    ///
    /// Alokasi hanya terjadi sekali di sini (`capacity + 1` slot);
    /// setelah itu tidak ada alokasi di hot path. Satu-satunya mode
    /// kegagalan adalah kegagalan alokasi itu sendiri (global allocator
    /// akan abort). Kapasitas 0 legal: menghasilkan buffer satu slot
    /// yang tidak pernah bisa terisi - setiap `push` gagal.
    pub fn new(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity + 1);
        for _ in 0..capacity + 1 {
            buffer.push(Slot::new());
        }

        Self {
            write_idx: CacheLinePadded::new(AtomicUsize::new(0)),
            read_idx: CacheLinePadded::new(AtomicUsize::new(0)),
            buffer: buffer.into_boxed_slice(),
        }
    }

    /// Push data ke buffer (Producer side)
    ///
    /// Returns `true` jika berhasil, `false` jika buffer penuh - state
    /// tidak berubah dan caller tetap memegang value-nya. Zero-allocation,
    /// lock-free, tidak pernah blocking; caller yang butuh semantik
    /// blocking harus polling dengan backoff sendiri.
    #[inline(always)]
    pub fn push(&self, value: T) -> bool {
        let write = self.write_idx.value.load(Ordering::Relaxed);
        let next = (write + 1) % self.buffer.len();

        // Acquire: pair dengan Release store di pop() - slot yang
        // dibebaskan consumer harus selesai dibaca sebelum producer
        // memakainya ulang
        let read = self.read_idx.value.load(Ordering::Acquire);

        // Kandidat write menabrak read cursor berarti buffer penuh
        if next == read {
            return false;
        }

        let slot = &self.buffer[write];

        // SAFETY: Slot di posisi write kosong secara logis dan tidak
        // sedang dibaca (consumer berhenti di read cursor)
        unsafe {
            (*slot.data.get()).write(value);
        }

        // Release fence: pastikan write di atas visible sebelum cursor
        // di-publish ke consumer
        self.write_idx.value.store(next, Ordering::Release);

        true
    }

    /// Pop data dari buffer (Consumer side)
    ///
    /// Returns `Some(T)` jika ada data, `None` jika buffer kosong.
    /// Zero-allocation, lock-free, tidak pernah blocking.
    #[inline(always)]
    pub fn pop(&self) -> Option<T> {
        let read = self.read_idx.value.load(Ordering::Relaxed);

        // Acquire: pair dengan Release store di push() - isi slot harus
        // visible sebelum cursor yang di-publish producer terlihat
        let write = self.write_idx.value.load(Ordering::Acquire);

        // Cek apakah buffer kosong
        if read == write {
            return None;
        }

        let slot = &self.buffer[read];

        // SAFETY: read != write berarti slot ini sudah ditulis producer
        // dan di-publish lewat Release, jadi datanya initialized
        let value = unsafe { (*slot.data.get()).assume_init_read() };

        // Release fence: slot baru boleh dipakai ulang producer setelah
        // read cursor maju
        self.read_idx
            .value
            .store((read + 1) % self.buffer.len(), Ordering::Release);

        Some(value)
    }

    /// Peek elemen paling depan tanpa memajukan read cursor (Consumer side)
    ///
    /// Returns copy dari elemen head, `None` jika kosong. Tidak memutasi
    /// state. Sama seperti `pop`, hanya boleh dipanggil dari consumer
    /// thread - `front` dan `pop` konkuren dari dua thread berbeda
    /// melanggar kontrak SPSC.
    #[inline(always)]
    pub fn front(&self) -> Option<T> {
        let read = self.read_idx.value.load(Ordering::Relaxed);
        let write = self.write_idx.value.load(Ordering::Acquire);

        if read == write {
            return None;
        }

        let slot = &self.buffer[read];

        // SAFETY: sama seperti pop() - slot sudah di-publish producer.
        // T: Copy, jadi membaca tanpa memajukan cursor tidak menduplikasi
        // ownership
        let value = unsafe { (*slot.data.get()).assume_init_read() };

        Some(value)
    }

    /// Cek apakah buffer kosong
    ///
    /// Advisory: dipanggil dari thread selain producer/consumer hasilnya
    /// snapshot yang bisa langsung stale.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        let read = self.read_idx.value.load(Ordering::Acquire);
        let write = self.write_idx.value.load(Ordering::Acquire);
        read == write
    }

    /// Cek apakah buffer penuh
    ///
    /// Penuh berarti write cursor berikutnya akan menabrak read cursor -
    /// tepat satu slot tersisa sebagai sentinel. Diturunkan dari invariant
    /// modulo, bukan perbandingan `write + 1 == read` mentah yang salah di
    /// batas wrap. Kapasitas 0 selalu penuh (dan selalu kosong). Advisory
    /// jika dipanggil cross-thread, seperti `is_empty`.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        let write = self.write_idx.value.load(Ordering::Acquire);
        let read = self.read_idx.value.load(Ordering::Acquire);
        (write + 1) % self.buffer.len() == read
    }

    /// Jumlah elemen dalam buffer (advisory snapshot)
    #[inline(always)]
    pub fn len(&self) -> usize {
        let write = self.write_idx.value.load(Ordering::Acquire);
        let read = self.read_idx.value.load(Ordering::Acquire);
        (write + self.buffer.len() - read) % self.buffer.len()
    }

    /// Kapasitas buffer (jumlah elemen maksimum, tanpa slot sentinel)
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len() - 1
    }
}
