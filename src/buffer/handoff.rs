//! Core handoff engine - HandoffBuffer.
//!
//! A [`HandoffBuffer`] is shared by one writer thread and one or more reader
//! threads. [`HandoffBuffer::write`] deposits bytes and then blocks until
//! reads have drained the queue; it is a rendezvous, not a fire-and-forget
//! enqueue. The writer can never get more than one write ahead of its
//! readers.
//!
//! # Example
//!
//! ```
//! use std::thread;
//! use handoffrs::HandoffBuffer;
//!
//! let buffer = HandoffBuffer::new();
//!
//! thread::scope(|s| {
//!     let writer = s.spawn(|| buffer.write(b"hello world"));
//!
//!     let mut out = Vec::new();
//!     let mut dst = [0u8; 4];
//!     while out.len() < 11 {
//!         if let Ok(n) = buffer.read(&mut dst) {
//!             out.extend_from_slice(&dst[..n]);
//!         }
//!     }
//!
//!     assert_eq!(writer.join().unwrap(), Ok(11));
//!     assert_eq!(out, b"hello world");
//! });
//! ```

use bytes::{Buf, BytesMut};
use parking_lot::{Condvar, Mutex};

use super::signal::DrainState;
use crate::config::HandoffConfig;
use crate::error::HandoffError;

#[derive(Debug)]
struct State {
    queue: BytesMut,
    drain: DrainState,
}

/// A byte queue whose writes block until their bytes have been read.
///
/// All access to the queue and to the pending drain signal happens under one
/// mutex. A write deposits its bytes, arms a drain signal and waits on a
/// condition variable without holding the lock. The read that empties the
/// queue fulfills the signal while still holding the lock, so the writer
/// cannot miss its wakeup.
///
/// # Single writer
///
/// Only one write may be outstanding at a time. A write issued while another
/// is still waiting for its bytes to drain fails with
/// [`HandoffError::WriterBusy`] and enqueues nothing. Multiple readers are
/// fine.
///
/// # Blocking
///
/// There is no timeout. A write whose bytes are never read blocks its thread
/// forever, so pair every writer with a reader that keeps reading.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use handoffrs::{HandoffBuffer, HandoffError};
///
/// let buffer = Arc::new(HandoffBuffer::new());
///
/// let writer = {
///     let buffer = Arc::clone(&buffer);
///     thread::spawn(move || buffer.write(&[1, 2, 3, 4, 5]))
/// };
///
/// // Wait for the bytes to land, then drain them.
/// while buffer.len() < 5 {
///     thread::yield_now();
/// }
/// let mut dst = [0u8; 5];
/// assert_eq!(buffer.read(&mut dst), Ok(5));
/// assert_eq!(writer.join().unwrap(), Ok(5));
///
/// // Nothing left.
/// assert_eq!(buffer.read(&mut dst), Err(HandoffError::EndOfStream));
/// ```
#[derive(Debug)]
pub struct HandoffBuffer {
    state: Mutex<State>,
    drained: Condvar,
    config: HandoffConfig,
}

impl HandoffBuffer {
    /// Creates an empty buffer with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(HandoffConfig::default())
    }

    /// Creates an empty buffer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::InvalidConfig`] if the configuration does not
    /// pass [`HandoffConfig::validate`].
    pub fn with_config(config: HandoffConfig) -> Result<Self, HandoffError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: HandoffConfig) -> Self {
        Self {
            state: Mutex::new(State {
                queue: BytesMut::with_capacity(config.initial_capacity()),
                drain: DrainState::default(),
            }),
            drained: Condvar::new(),
            config,
        }
    }

    /// Returns the configuration this buffer was built with.
    pub fn config(&self) -> &HandoffConfig {
        &self.config
    }

    /// Returns the number of bytes currently queued.
    pub fn len(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Returns true if no bytes are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true while a write is blocked waiting for its bytes to drain.
    pub fn has_pending_write(&self) -> bool {
        self.state.lock().drain.is_pending()
    }

    /// Reads up to `dst.len()` bytes from the front of the queue.
    ///
    /// Returns the number of bytes copied. If this read empties the queue and
    /// a write is waiting on it, that write is released.
    ///
    /// An empty `dst` returns `Ok(0)` without touching the queue.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::EndOfStream`] if the queue is empty. The read
    /// never blocks waiting for a writer.
    pub fn read(&self, dst: &mut [u8]) -> Result<usize, HandoffError> {
        if dst.is_empty() {
            return Ok(0);
        }

        let mut state = self.state.lock();
        let queued = state.queue.len();
        if queued == 0 {
            return Err(HandoffError::EndOfStream);
        }

        let n = dst.len().min(queued);
        dst[..n].copy_from_slice(&state.queue[..n]);

        if n < queued {
            state.queue.advance(n);

            #[cfg(feature = "tracing")]
            tracing::trace!(n, remaining = queued - n, "read partial");

            return Ok(n);
        }

        self.reset_queue(&mut state);

        #[cfg(feature = "tracing")]
        tracing::trace!(n, remaining = 0, "read drained queue");

        // Fulfilled under the same lock that observed the queue empty.
        if let Some(_signal) = state.drain.fulfill() {
            #[cfg(feature = "tracing")]
            tracing::debug!(ticket = _signal.ticket(), "drain signal fulfilled");

            self.drained.notify_one();
        }

        Ok(n)
    }

    /// Appends `src` to the queue and blocks until it has been drained.
    ///
    /// Returns `src.len()` once reads have consumed every queued byte.
    ///
    /// An empty `src` returns `Ok(0)` at once and does not wait for a reader:
    /// no drain signal is armed, so there is no rendezvous for a later read to
    /// release, and that read reports [`HandoffError::EndOfStream`] as usual.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::WriterBusy`] without enqueuing anything if
    /// another write is still waiting for its bytes to drain.
    pub fn write(&self, src: &[u8]) -> Result<usize, HandoffError> {
        let mut state = self.state.lock();

        if state.drain.is_pending() {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = src.len(), "write rejected, previous write still pending");

            return Err(HandoffError::WriterBusy);
        }

        if src.is_empty() {
            return Ok(0);
        }

        state.queue.extend_from_slice(src);
        let signal = state.drain.arm();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = src.len(),
            queued = state.queue.len(),
            ticket = signal.ticket(),
            "write deposited bytes"
        );

        // The wait releases the lock and reacquires it on wakeup.
        while !state.drain.is_fulfilled(signal) {
            self.drained.wait(&mut state);
        }

        Ok(src.len())
    }

    /// Empties the queue, releasing it if it grew past the retained limit.
    fn reset_queue(&self, state: &mut State) {
        let capacity = state.queue.capacity();
        if capacity > self.config.max_retained_capacity() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                capacity,
                retained = self.config.initial_capacity(),
                "releasing oversized queue"
            );

            state.queue = BytesMut::with_capacity(self.config.initial_capacity());
        } else {
            state.queue.clear();
        }
    }
}

impl Default for HandoffBuffer {
    fn default() -> Self {
        Self::new()
    }
}
