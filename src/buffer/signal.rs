//! One-shot drain signals.
//!
//! Each write that deposits bytes arms a fresh [`DrainSignal`] identified by a
//! monotonically increasing ticket. The read that empties the queue fulfills
//! the pending signal by advancing the `fulfilled` watermark past its ticket.
//! A signal is taken out of its slot when fulfilled, so it can never be
//! fulfilled twice.
//!
//! `DrainState` is not synchronized itself; it lives inside the buffer's
//! mutex and the writer waits on the buffer's condition variable.

/// Ticket for one pending write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DrainSignal {
    ticket: u64,
}

impl DrainSignal {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub(crate) fn ticket(&self) -> u64 {
        self.ticket
    }
}

#[derive(Debug, Default)]
pub(crate) struct DrainState {
    pending: Option<DrainSignal>,
    issued: u64,
    fulfilled: u64,
}

impl DrainState {
    /// Returns true while a write is waiting for its bytes to drain.
    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arms a fresh signal and stores it as the pending one.
    ///
    /// The caller must have checked [`DrainState::is_pending`] first.
    pub(crate) fn arm(&mut self) -> DrainSignal {
        debug_assert!(self.pending.is_none(), "drain signal already pending");
        self.issued += 1;
        let signal = DrainSignal {
            ticket: self.issued,
        };
        self.pending = Some(signal);
        signal
    }

    /// Fulfills and clears the pending signal, if any.
    pub(crate) fn fulfill(&mut self) -> Option<DrainSignal> {
        let signal = self.pending.take()?;
        self.fulfilled = signal.ticket;
        Some(signal)
    }

    pub(crate) fn is_fulfilled(&self, signal: DrainSignal) -> bool {
        self.fulfilled >= signal.ticket
    }
}
