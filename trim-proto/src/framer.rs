//! CRLF line framer.
//!
//! Bytes are fed one at a time, typically straight from a UART receive
//! loop. A line is complete once the last two stored bytes are `\r\n`; the
//! terminator is kept in the yielded line.

use heapless::Vec;

/// Maximum line length for the protocol (including CRLF).
pub const MAX_LINE_LENGTH: usize = 64;

const CR: u8 = 0x0D;
const LF: u8 = 0x0A;

/// Error reported by the framer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// A line exceeded the buffer capacity and was dropped.
    Overflow,
}

/// Accumulates bytes into CRLF-terminated lines.
///
/// # Overflow
///
/// When a byte arrives and the buffer is already full, the partial line is
/// dropped and everything up to the next `\r\n` is discarded. The framer
/// then reports [`FrameError::Overflow`] once and starts a fresh line, so a
/// single overlong line never bleeds into the next command.
///
/// # Example
///
/// ```
/// use trim_proto::LineFramer;
///
/// let mut framer: LineFramer = LineFramer::new();
/// let mut line = None;
/// for &b in b"Trim:42\r\n" {
///     if let Some(Ok(l)) = framer.push(b) {
///         line = Some(l.len());
///     }
/// }
/// assert_eq!(line, Some(9));
/// ```
#[derive(Debug)]
pub struct LineFramer<const N: usize = MAX_LINE_LENGTH> {
    buffer: Vec<u8, N>,
    /// Last yielded line is still in the buffer; cleared on the next push.
    complete: bool,
    /// Dropping the remainder of an overlong line.
    discarding: bool,
    last: u8,
}

impl<const N: usize> LineFramer<N> {
    /// Create an empty framer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            complete: false,
            discarding: false,
            last: 0,
        }
    }

    /// Feed one byte.
    ///
    /// Returns `Some(Ok(line))` when `byte` completes a line (CRLF
    /// included), `Some(Err(FrameError::Overflow))` when an overlong line
    /// has been discarded, and `None` otherwise.
    pub fn push(&mut self, byte: u8) -> Option<Result<&[u8], FrameError>> {
        if self.complete {
            self.buffer.clear();
            self.complete = false;
        }

        if self.discarding {
            let terminated = self.last == CR && byte == LF;
            self.last = byte;
            if terminated {
                self.discarding = false;
                self.last = 0;
                return Some(Err(FrameError::Overflow));
            }
            return None;
        }

        if self.buffer.is_full() {
            let terminated = self.buffer.last() == Some(&CR) && byte == LF;
            self.buffer.clear();
            if terminated {
                return Some(Err(FrameError::Overflow));
            }
            self.discarding = true;
            self.last = byte;
            return None;
        }

        // Cannot fail: fullness was checked above.
        let _ = self.buffer.push(byte);

        if self.buffer.ends_with(&[CR, LF]) {
            self.complete = true;
            return Some(Ok(self.buffer.as_slice()));
        }
        None
    }

    /// Drop any partial line and leave the discarding state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.complete = false;
        self.discarding = false;
        self.last = 0;
    }

    /// Number of bytes buffered for the current line.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        if self.complete {
            0
        } else {
            self.buffer.len()
        }
    }

    /// Check if no bytes of a new line have been received.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the framer is dropping the tail of an overlong line.
    #[inline]
    #[must_use]
    pub fn is_discarding(&self) -> bool {
        self.discarding
    }
}

impl<const N: usize> Default for LineFramer<N> {
    fn default() -> Self {
        Self::new()
    }
}
