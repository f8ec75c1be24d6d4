//! `std::io` adapters.
//!
//! Implemented for both `HandoffBuffer` and `&HandoffBuffer`, the same way
//! std does for `File`, so the writer side can use `write_all` on a shared
//! reference.
//!
//! Read maps [`HandoffError::EndOfStream`] to `Ok(0)`, which here means the
//! queue is empty *right now*, not that the writer is finished. Helpers that
//! treat `Ok(0)` as the end of the stream (`io::copy`, `read_to_end`,
//! `read_exact`) stop at the first gap between writes. Readers must loop until
//! they know by other means (a byte count, a framing marker, a joined writer)
//! that the stream has ended. Flush is a no-op: a successful write has already
//! drained.

use std::io;

use super::HandoffBuffer;
use crate::error::HandoffError;

impl io::Read for &HandoffBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match HandoffBuffer::read(*self, buf) {
            Ok(n) => Ok(n),
            Err(HandoffError::EndOfStream) => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl io::Write for &HandoffBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        HandoffBuffer::write(*self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for HandoffBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut &*self, buf)
    }
}

impl io::Write for HandoffBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
