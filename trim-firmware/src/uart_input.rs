use embassy_rp::uart::{Async, Error as UartError, UartRx};
use trim_core::{CommandAssembler, CommandSource, InputError};
use trim_proto::Command;

/// Convert UART errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `UartError` and `InputError` are defined in external crates).
#[inline]
fn uart_error_to_input_error(e: UartError) -> InputError {
    match e {
        UartError::Framing => InputError::Framing,
        UartError::Overrun => InputError::Overflow,
        _ => InputError::Io,
    }
}

/// UART-based source of trim commands.
///
/// Reads `<mode>:<setting>\r\n` lines byte by byte and tokenizes them.
///
/// # Pins
///
/// Uses UART1:
/// - GPIO 8: TX
/// - GPIO 9: RX
pub struct UartCommandSource<'d> {
    rx: UartRx<'d, Async>,
    assembler: CommandAssembler,
}

impl<'d> UartCommandSource<'d> {
    /// Create a new command source from the given UART receiver.
    #[must_use]
    pub fn new(rx: UartRx<'d, Async>) -> Self {
        Self {
            rx,
            assembler: CommandAssembler::new(),
        }
    }
}

impl CommandSource for UartCommandSource<'_> {
    async fn receive(&mut self) -> Result<Command, InputError> {
        let mut byte = [0u8; 1];

        loop {
            if let Err(e) = self.rx.read(&mut byte).await {
                // A corrupted byte poisons the whole line
                self.assembler.reset();
                return Err(uart_error_to_input_error(e));
            }

            if let Some(result) = self.assembler.push(byte[0]) {
                return result;
            }
        }
    }
}
