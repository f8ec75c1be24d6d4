//! handoffrs
//!
//! A synchronized rendezvous byte buffer for Rust.
//!
//! `handoffrs` lets one writer thread hand a stream of bytes to one or more
//! reader threads, where every write blocks until the readers have drained
//! everything it wrote. It is a small primitive for tightly coupled
//! producer/consumer pairs:
//!
//! - audio or device pipelines where the producer must not run ahead
//! - pacing a generator against its consumer
//! - adapting a push-style writer to a pull-style reader
//!
//! The crate intentionally:
//! - does NOT support more than one outstanding writer
//! - does NOT time out or cancel blocked writes
//! - does NOT persist bytes or touch files and sockets
//!
//! It only does one thing: **write bytes → block until they are read**
//!
//! # Example
//!
//! ```
//! use std::io::{Read, Write};
//! use std::thread;
//! use handoffrs::HandoffBuffer;
//!
//! let buffer = HandoffBuffer::new();
//!
//! thread::scope(|s| {
//!     s.spawn(|| {
//!         let mut writer = &buffer;
//!         for frame in [&b"first "[..], &b"second"[..]] {
//!             // Returns only after the reader has taken every byte.
//!             writer.write_all(frame).unwrap();
//!         }
//!     });
//!
//!     let mut reader = &buffer;
//!     let mut out = Vec::new();
//!     let mut dst = [0u8; 4];
//!     while out.len() < 12 {
//!         let n = Read::read(&mut reader, &mut dst).unwrap();
//!         out.extend_from_slice(&dst[..n]);
//!     }
//!     assert_eq!(out, b"first second");
//! });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;

//
// Public surface (intentionally tiny)
//

pub use buffer::HandoffBuffer;
pub use config::HandoffConfig;
pub use error::HandoffError;
