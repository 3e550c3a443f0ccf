//! Output channel trait and error types.

use embedded_hal::digital::{OutputPin, PinState};

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Pin/peripheral write failed.
    Io,
    /// Channel id not backed by the driver.
    UnknownChannel,
}

/// Physical output channel identifier.
///
/// What the number means is up to the [`ChannelDriver`]; for [`PinBank`] it
/// is the index into the pin array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

impl ChannelId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Binary output channels ("set one channel high or low").
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ChannelDriver {
    /// Drive `channel` high (`true`) or low (`false`).
    fn set_channel(&mut self, channel: ChannelId, active: bool) -> Result<(), OutputError>;
}

impl<D: ChannelDriver + ?Sized> ChannelDriver for &mut D {
    fn set_channel(&mut self, channel: ChannelId, active: bool) -> Result<(), OutputError> {
        (**self).set_channel(channel, active)
    }
}

/// A fixed array of `embedded-hal` output pins addressed by [`ChannelId`].
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    /// Create a bank; channel `i` is `pins[i]`.
    #[must_use]
    pub fn new(pins: [P; N]) -> Self {
        Self { pins }
    }

    /// Decompose the bank back into its pins.
    pub fn into_inner(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> ChannelDriver for PinBank<P, N> {
    fn set_channel(&mut self, channel: ChannelId, active: bool) -> Result<(), OutputError> {
        let pin = self
            .pins
            .get_mut(channel.index())
            .ok_or(OutputError::UnknownChannel)?;
        pin.set_state(PinState::from(active))
            .map_err(|_| OutputError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn test_pin_bank_drives_indexed_pin() {
        let mut bank = PinBank::new([MockPin::default(), MockPin::default()]);
        bank.set_channel(ChannelId(1), true).unwrap();
        let pins = bank.into_inner();
        assert!(!pins[0].high);
        assert_eq!(pins[0].writes, 0);
        assert!(pins[1].high);
        assert_eq!(pins[1].writes, 1);
    }

    #[test]
    fn test_pin_bank_unknown_channel() {
        let mut bank = PinBank::new([MockPin::default()]);
        assert_eq!(
            bank.set_channel(ChannelId(1), true),
            Err(OutputError::UnknownChannel)
        );
    }

    #[test]
    fn test_pin_bank_maps_pin_errors() {
        let mut bank = PinBank::new([BrokenPin]);
        assert_eq!(bank.set_channel(ChannelId(0), false), Err(OutputError::Io));
    }
}
