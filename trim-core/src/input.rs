//! Command source trait and error types.

use core::future::Future;
use trim_proto::{Command, FrameError, TokenizeError};

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// UART/communication I/O error.
    Io,
    /// UART framing error.
    Framing,
    /// Line too long, or receiver overrun.
    Overflow,
    /// Line could not be split into mode and setting.
    Tokenize(TokenizeError),
}

impl From<TokenizeError> for InputError {
    fn from(err: TokenizeError) -> Self {
        InputError::Tokenize(err)
    }
}

impl From<FrameError> for InputError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::Overflow => InputError::Overflow,
        }
    }
}

/// Async trait for command sources.
///
/// This trait abstracts where command lines come from (UART, USB CDC, a test
/// script) so the forwarding logic can be exercised on the host.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait CommandSource {
    /// Wait for and receive the next complete, tokenized command.
    ///
    /// Errors are per-line: after an error the source is ready to receive
    /// the next line.
    fn receive(&mut self) -> impl Future<Output = Result<Command, InputError>>;
}
