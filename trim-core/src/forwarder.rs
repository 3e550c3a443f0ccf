//! CommandForwarder: moves commands from a source into the mailbox.

use crate::input::{CommandSource, InputError};
use crate::mailbox::CommandMailbox;
use embassy_sync::blocking_mutex::raw::RawMutex;

/// Producer side of the pipeline.
///
/// Receives tokenized commands from a [`CommandSource`] and publishes them
/// to a [`CommandMailbox`] for the polling consumer.
///
/// # Error Handling
///
/// Input errors drop the current line only; the forwarder keeps running and
/// the mailbox is left as it was.
pub struct CommandForwarder<'m, S, M: RawMutex> {
    source: S,
    mailbox: &'m CommandMailbox<M>,
}

impl<'m, S: CommandSource, M: RawMutex> CommandForwarder<'m, S, M> {
    /// Create a new forwarder from a command source and mailbox.
    pub fn new(source: S, mailbox: &'m CommandMailbox<M>) -> Self {
        Self { source, mailbox }
    }

    /// Run the forwarder indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// Receive a single command and publish it.
    ///
    /// Returns the result of the operation for testing purposes.
    pub async fn process_one(&mut self) -> Result<(), InputError> {
        match self.source.receive().await {
            Ok(cmd) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Received {:?}", cmd);
                if self.mailbox.publish(cmd) {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Command published while another was pending");
                }
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Input error: {:?}", e);
                Err(e)
            }
        }
    }

    /// Get a reference to the command source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the command source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get the mailbox this forwarder publishes to.
    pub fn mailbox(&self) -> &'m CommandMailbox<M> {
        self.mailbox
    }
}
