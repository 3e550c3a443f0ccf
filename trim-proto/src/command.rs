//! Tokenized `<mode>:<setting>` command.

use crate::split::{split, SplitError};
use heapless::Vec;

/// Maximum stored length of the mode field.
pub const MODE_CAPACITY: usize = 16;

/// Maximum stored length of the setting field (terminator included).
pub const SETTING_CAPACITY: usize = 32;

/// Field separator between mode and setting.
pub const FIELD_DELIMITER: &[u8] = b":";

/// Substring that marks a mode as a trim command.
pub const TRIM_KEYWORD: &[u8] = b"Trim";

/// Error type for command tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenizeError {
    /// Empty delimiter or zero field index.
    InvalidArgument,
    /// Line shorter than the delimiter.
    LineTooShort,
    /// Mode or setting field missing, empty, or over capacity.
    FieldNotFound,
}

impl From<SplitError> for TokenizeError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::InvalidArgument => TokenizeError::InvalidArgument,
            SplitError::LineTooShort => TokenizeError::LineTooShort,
        }
    }
}

/// One complete command line, split into its two fields.
///
/// The setting is stored exactly as received, so it usually still ends with
/// `\r\n`; the decoder strips that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    mode: Vec<u8, MODE_CAPACITY>,
    setting: Vec<u8, SETTING_CAPACITY>,
}

impl Command {
    /// Tokenize a framed line.
    ///
    /// # Example
    ///
    /// ```
    /// use trim_proto::Command;
    ///
    /// let cmd = Command::parse(b"Trim:0x00FF\r\n").unwrap();
    /// assert_eq!(cmd.mode(), b"Trim");
    /// assert_eq!(cmd.setting(), b"0x00FF\r\n");
    /// assert!(cmd.is_trim());
    /// ```
    pub fn parse(line: &[u8]) -> Result<Self, TokenizeError> {
        let mut mode = [0u8; MODE_CAPACITY];
        let mut setting = [0u8; SETTING_CAPACITY];

        let mode_len = split(line, FIELD_DELIMITER, 1, &mut mode)?;
        let setting_len = split(line, FIELD_DELIMITER, 2, &mut setting)?;
        if mode_len == 0 || setting_len == 0 {
            return Err(TokenizeError::FieldNotFound);
        }

        Self::new(&mode[..mode_len], &setting[..setting_len])
    }

    /// Build a command from field contents.
    ///
    /// Fails with [`TokenizeError::FieldNotFound`] if either field exceeds
    /// its capacity.
    pub fn new(mode: &[u8], setting: &[u8]) -> Result<Self, TokenizeError> {
        Ok(Self {
            mode: Vec::from_slice(mode).map_err(|_| TokenizeError::FieldNotFound)?,
            setting: Vec::from_slice(setting).map_err(|_| TokenizeError::FieldNotFound)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> &[u8] {
        &self.mode
    }

    #[inline]
    #[must_use]
    pub fn setting(&self) -> &[u8] {
        &self.setting
    }

    /// Check if the mode contains [`TRIM_KEYWORD`] anywhere.
    #[must_use]
    pub fn is_trim(&self) -> bool {
        self.mode
            .windows(TRIM_KEYWORD.len())
            .any(|w| w == TRIM_KEYWORD)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Command {{ mode: {=[u8]:a}, setting: {=[u8]:a} }}",
            self.mode(),
            self.setting()
        )
    }
}
