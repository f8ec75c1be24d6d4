//! Error types for handoffrs.

use std::fmt;
use std::io;

/// Errors that can occur while handing bytes through a [`HandoffBuffer`].
///
/// [`HandoffBuffer`]: crate::HandoffBuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffError {
    /// A read found the queue empty.
    EndOfStream,

    /// A write was attempted while another write is still waiting for its
    /// bytes to drain. Only one writer may be active at a time.
    WriterBusy,

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffError::EndOfStream => write!(f, "end of stream"),
            HandoffError::WriterBusy => {
                write!(f, "writer busy: a previous write has not drained yet")
            }
            HandoffError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for HandoffError {}

impl From<HandoffError> for io::Error {
    fn from(e: HandoffError) -> Self {
        let kind = match e {
            HandoffError::EndOfStream => io::ErrorKind::UnexpectedEof,
            HandoffError::WriterBusy => io::ErrorKind::WouldBlock,
            HandoffError::InvalidConfig { .. } => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, e)
    }
}
