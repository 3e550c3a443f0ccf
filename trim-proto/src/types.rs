//! Core trim types: TrimValue and TrimSignal.

/// One of the sixteen named trim lines carried by a [`TrimValue`].
///
/// The discriminant is the bit position inside the 16-bit word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrimSignal {
    R3In0 = 0,
    R3In1 = 1,
    R3In2 = 2,
    R3In3 = 3,
    R2In0 = 4,
    R2In1 = 5,
    R2In2 = 6,
    R2In3 = 7,
    R1In0 = 8,
    R1In1 = 9,
    R1In2 = 10,
    R1In3 = 11,
    Ldo0 = 12,
    Ldo1 = 13,
    Ldo2 = 14,
    Ldo3 = 15,
}

impl TrimSignal {
    /// All signals in bit order (bit 0 first).
    pub const ALL: [TrimSignal; 16] = [
        TrimSignal::R3In0,
        TrimSignal::R3In1,
        TrimSignal::R3In2,
        TrimSignal::R3In3,
        TrimSignal::R2In0,
        TrimSignal::R2In1,
        TrimSignal::R2In2,
        TrimSignal::R2In3,
        TrimSignal::R1In0,
        TrimSignal::R1In1,
        TrimSignal::R1In2,
        TrimSignal::R1In3,
        TrimSignal::Ldo0,
        TrimSignal::Ldo1,
        TrimSignal::Ldo2,
        TrimSignal::Ldo3,
    ];

    /// Bit position of this signal inside a [`TrimValue`].
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Look up the signal carried by bit `bit`.
    #[inline]
    #[must_use]
    pub const fn from_bit(bit: u8) -> Option<Self> {
        if bit < 16 {
            Some(Self::ALL[bit as usize])
        } else {
            None
        }
    }

    /// Hardware label of the line, as printed on the board.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TrimSignal::R3In0 => "R3_IN0",
            TrimSignal::R3In1 => "R3_IN1",
            TrimSignal::R3In2 => "R3_IN2",
            TrimSignal::R3In3 => "R3_IN3",
            TrimSignal::R2In0 => "R2_IN0",
            TrimSignal::R2In1 => "R2_IN1",
            TrimSignal::R2In2 => "R2_IN2",
            TrimSignal::R2In3 => "R2_IN3",
            TrimSignal::R1In0 => "R1_IN0",
            TrimSignal::R1In1 => "R1_IN1",
            TrimSignal::R1In2 => "R1_IN2",
            TrimSignal::R1In3 => "R1_IN3",
            TrimSignal::Ldo0 => "LDO0",
            TrimSignal::Ldo1 => "LDO1",
            TrimSignal::Ldo2 => "LDO2",
            TrimSignal::Ldo3 => "LDO3",
        }
    }
}

/// 16-bit trim configuration word.
///
/// Bit *i* of the integer is the state of `TrimSignal::ALL[i]`; there is no
/// separate field storage, so the integer and the per-signal view can never
/// disagree.
///
/// # Example
///
/// ```
/// use trim_proto::{TrimSignal, TrimValue};
///
/// let value = TrimValue::new(0x1001);
/// assert!(value.is_set(TrimSignal::R3In0));
/// assert!(value.is_set(TrimSignal::Ldo0));
/// assert!(!value.is_set(TrimSignal::Ldo3));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrimValue(pub u16);

impl TrimValue {
    /// All lines low.
    pub const ZERO: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// State of a single signal.
    #[inline]
    #[must_use]
    pub const fn is_set(self, signal: TrimSignal) -> bool {
        (self.0 >> signal.bit()) & 1 == 1
    }

    /// Set or clear a single signal.
    #[inline]
    pub fn set(&mut self, signal: TrimSignal, active: bool) {
        let mask = 1u16 << signal.bit();
        if active {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    /// Iterate `(signal, state)` pairs from bit 0 to bit 15.
    pub fn signals(self) -> impl DoubleEndedIterator<Item = (TrimSignal, bool)> {
        TrimSignal::ALL
            .into_iter()
            .map(move |signal| (signal, self.is_set(signal)))
    }

    /// Rebuild a value from per-signal states.
    #[must_use]
    pub fn from_signals<I>(states: I) -> Self
    where
        I: IntoIterator<Item = (TrimSignal, bool)>,
    {
        let mut value = Self::ZERO;
        for (signal, active) in states {
            value.set(signal, active);
        }
        value
    }
}

impl From<u16> for TrimValue {
    #[inline]
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<TrimValue> for u16 {
    #[inline]
    fn from(value: TrimValue) -> Self {
        value.0
    }
}
