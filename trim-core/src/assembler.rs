//! Byte-at-a-time command assembly (framer + tokenizer).

use crate::input::InputError;
use trim_proto::{Command, LineFramer, MAX_LINE_LENGTH};

/// Turns a raw byte stream into [`Command`]s.
///
/// Owns the line buffer, so a receive loop only needs to feed bytes:
///
/// ```
/// use trim_core::CommandAssembler;
///
/// let mut assembler: CommandAssembler = CommandAssembler::new();
/// let mut commands = 0;
/// for &b in b"Trim:1\r\nTrim:0x2\r\n" {
///     if let Some(Ok(_cmd)) = assembler.push(b) {
///         commands += 1;
///     }
/// }
/// assert_eq!(commands, 2);
/// ```
#[derive(Debug, Default)]
pub struct CommandAssembler<const N: usize = MAX_LINE_LENGTH> {
    framer: LineFramer<N>,
}

impl<const N: usize> CommandAssembler<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            framer: LineFramer::new(),
        }
    }

    /// Feed one byte; yields a result for every line boundary.
    pub fn push(&mut self, byte: u8) -> Option<Result<Command, InputError>> {
        match self.framer.push(byte)? {
            Ok(line) => Some(Command::parse(line).map_err(InputError::from)),
            Err(err) => Some(Err(err.into())),
        }
    }

    /// Drop any partially received line (e.g. after a UART error).
    pub fn reset(&mut self) {
        self.framer.reset();
    }
}
