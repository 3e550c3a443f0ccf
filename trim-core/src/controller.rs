//! TrimController: decodes commands and applies changed settings.

use crate::dispatch::dispatch;
use crate::output::{ChannelDriver, OutputError};
use crate::table::ChannelTable;
use trim_proto::{decode_setting, Command, DecodeError, TrimValue};

/// What happened to a handled command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Outcome {
    /// New value, all channels were driven.
    Applied(TrimValue),
    /// Same value as the last applied one; nothing was driven.
    Unchanged(TrimValue),
    /// Mode is not a trim command.
    Ignored,
}

/// Error type for controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrimError {
    /// Setting is not a valid literal or is out of range.
    Decode(DecodeError),
    /// A channel write failed.
    Output(OutputError),
}

impl From<DecodeError> for TrimError {
    fn from(err: DecodeError) -> Self {
        TrimError::Decode(err)
    }
}

impl From<OutputError> for TrimError {
    fn from(err: OutputError) -> Self {
        TrimError::Output(err)
    }
}

/// Applies trim commands to a bank of output channels.
///
/// Holds the last applied value so that repeating a command does not
/// re-drive the hardware. Starts with no value applied, so the first valid
/// command is always dispatched, including `0`.
///
/// # Error Handling
///
/// Rejected commands leave the last applied value and the outputs
/// untouched. If a channel write fails the last applied value is forgotten,
/// so resending the same command drives the outputs again.
pub struct TrimController<D> {
    driver: D,
    table: ChannelTable,
    last_applied: Option<TrimValue>,
}

impl<D: ChannelDriver> TrimController<D> {
    /// Create a controller driving `driver` through `table`.
    pub const fn new(driver: D, table: ChannelTable) -> Self {
        Self {
            driver,
            table,
            last_applied: None,
        }
    }

    /// Handle one tokenized command.
    ///
    /// Commands whose mode does not contain `Trim` are ignored.
    pub fn handle(&mut self, cmd: &Command) -> Result<Outcome, TrimError> {
        if !cmd.is_trim() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Ignoring mode {=[u8]:a}", cmd.mode());
            return Ok(Outcome::Ignored);
        }

        let value = decode_setting(cmd.setting()).inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected setting {=[u8]:a}: {:?}", cmd.setting(), _e);
        })?;

        self.apply(value)
    }

    /// Apply a decoded value if it differs from the last applied one.
    pub fn apply(&mut self, value: TrimValue) -> Result<Outcome, TrimError> {
        if self.last_applied == Some(value) {
            #[cfg(feature = "defmt")]
            defmt::trace!("Setting {=u16:#x} unchanged", value.raw());
            return Ok(Outcome::Unchanged(value));
        }

        self.last_applied = Some(value);
        if let Err(e) = dispatch(value, &self.table, &mut self.driver) {
            #[cfg(feature = "defmt")]
            defmt::error!("Output error while applying {=u16:#x}: {:?}", value.raw(), e);
            self.last_applied = None;
            return Err(TrimError::Output(e));
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Applied setting {=u16:#x}", value.raw());
        Ok(Outcome::Applied(value))
    }

    /// Last value successfully dispatched, if any.
    #[inline]
    #[must_use]
    pub fn last_applied(&self) -> Option<TrimValue> {
        self.last_applied
    }

    /// Get the channel table.
    pub fn table(&self) -> &ChannelTable {
        &self.table
    }

    /// Get a reference to the channel driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a mutable reference to the channel driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Decompose the controller into its driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
