//! The synchronized handoff buffer.
//!
//! - [`HandoffBuffer`] - Mutex-guarded byte queue with rendezvous writes
//!
//! Drain signals and the `std::io` adapters are implementation details.

mod handoff;
mod io;
mod signal;

pub use handoff::HandoffBuffer;
