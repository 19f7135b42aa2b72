//! Shared buffer pool for encode/decode output.
//!
//! Encoding on the hot path should not pay a heap allocation per message.
//! The pool hands out exclusively-owned buffers that return automatically
//! when dropped, so a buffer is released on every exit path: success,
//! encode failure, or decode failure. Acquire and release are safe from
//! any number of threads.
//!
//! ```text
//! Publish Path → [BufferPool::acquire] → encode_message_into → Socket Send
//!                        ↓                                         ↓
//!                  reused Vec<u8>                      PooledBuffer dropped,
//!                                                      buffer back in pool
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing::trace;

/// Default capacity of a pooled buffer. Covers the 56-byte header plus
/// typical payloads without regrowth.
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Default cap on idle buffers retained by the pool.
pub const DEFAULT_MAX_POOLED: usize = 64;

/// Fixed-capacity pool of reusable byte buffers.
///
/// Buffers grow on demand like any `Vec<u8>`; the pool only bounds how
/// many idle buffers it keeps, extras are freed on release.
#[derive(Debug)]
pub struct BufferPool {
    free: Mutex<Vec<Vec<u8>>>,
    outstanding: AtomicUsize,
    buffer_capacity: usize,
    max_pooled: usize,
}

impl BufferPool {
    pub fn new(buffer_capacity: usize, max_pooled: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            outstanding: AtomicUsize::new(0),
            buffer_capacity,
            max_pooled,
        }
    }

    /// Acquire an empty buffer, reusing a pooled one when available.
    ///
    /// Ownership is exclusive until the returned guard is dropped (release
    /// back to the pool) or detached.
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let recycled = self
            .free
            .lock()
            .expect("buffer pool mutex poisoned")
            .pop();
        let buf = match recycled {
            Some(buf) => buf,
            None => {
                trace!(capacity = self.buffer_capacity, "buffer pool allocating");
                Vec::with_capacity(self.buffer_capacity)
            }
        };
        self.outstanding.fetch_add(1, Ordering::Relaxed);
        PooledBuffer {
            buf: Some(buf),
            pool: self,
        }
    }

    /// Buffers currently held by callers.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Relaxed)
    }

    /// Idle buffers currently retained.
    pub fn pooled(&self) -> usize {
        self.free
            .lock()
            .expect("buffer pool mutex poisoned")
            .len()
    }

    fn release(&self, mut buf: Vec<u8>) {
        self.outstanding.fetch_sub(1, Ordering::Relaxed);
        buf.clear();
        let mut free = self.free.lock().expect("buffer pool mutex poisoned");
        if free.len() < self.max_pooled {
            free.push(buf);
        }
        // Over the cap the buffer is simply dropped here.
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_POOLED)
    }
}

/// Exclusively-owned pooled buffer.
///
/// Dereferences to `Vec<u8>` for use with the `*_into` encode functions.
/// Dropping the guard releases the buffer back to its pool.
#[derive(Debug)]
pub struct PooledBuffer<'a> {
    buf: Option<Vec<u8>>,
    pool: &'a BufferPool,
}

impl PooledBuffer<'_> {
    /// Take the allocation out of the pool's accounting entirely.
    ///
    /// The pool's outstanding count drops as if the buffer were released;
    /// the allocation itself is now the caller's to keep.
    pub fn detach(mut self) -> Vec<u8> {
        let buf = self.buf.take().unwrap_or_default();
        self.pool.outstanding.fetch_sub(1, Ordering::Relaxed);
        buf
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        self.buf.as_ref().expect("buffer taken before drop")
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        self.buf.as_mut().expect("buffer taken before drop")
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            self.pool.release(buf);
        }
    }
}
