//! Human-readable output on UART TX.

use core::fmt::{self, Write};
use defmt::{error, warn};
use embassy_rp::uart::{Async, UartTx};
use heapless::String;
use trim_core::{Outcome, TrimError};
use trim_proto::report::{write_command_echo, write_decode_error, write_report, MAX_REPORT_LEN};
use trim_proto::{clean_setting, Command};

use crate::config::FIRMWARE_VERSION;

type ReportBuffer = String<MAX_REPORT_LEN>;

/// Text console on the UART transmitter.
///
/// Output is best effort: formatting overflow and write errors are logged
/// and otherwise ignored.
pub struct Console<'d> {
    tx: UartTx<'d, Async>,
}

impl<'d> Console<'d> {
    #[must_use]
    pub fn new(tx: UartTx<'d, Async>) -> Self {
        Self { tx }
    }

    /// Startup line followed by the firmware version.
    pub async fn banner(&mut self) {
        self.render(|w| write!(w, "Start Up\r\n{} Version\r\n", FIRMWARE_VERSION))
            .await;
    }

    /// Echo the mode and setting fields of a command.
    pub async fn echo(&mut self, cmd: &Command) {
        self.render(|w| write_command_echo(w, cmd)).await;
    }

    /// Describe what the controller did with `cmd`.
    ///
    /// Applied settings get the full report, rejected settings one error
    /// line. Unchanged and ignored commands print nothing.
    pub async fn outcome(&mut self, cmd: &Command, result: &Result<Outcome, TrimError>) {
        let clean = clean_setting(cmd.setting());
        match *result {
            Ok(Outcome::Applied(value)) => {
                self.render(|w| write_report(w, cmd.mode(), &clean, value))
                    .await;
            }
            Err(TrimError::Decode(err)) => {
                self.render(|w| write_decode_error(w, err, &clean)).await;
            }
            Ok(Outcome::Unchanged(_)) | Ok(Outcome::Ignored) | Err(TrimError::Output(_)) => {}
        }
    }

    async fn render<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ReportBuffer) -> fmt::Result,
    {
        let mut buf = ReportBuffer::new();
        if f(&mut buf).is_err() {
            warn!("Console output truncated");
        }
        self.send(buf.as_bytes()).await;
    }

    async fn send(&mut self, bytes: &[u8]) {
        if let Err(e) = self.tx.write(bytes).await {
            error!("UART write error: {:?}", e);
        }
    }
}
