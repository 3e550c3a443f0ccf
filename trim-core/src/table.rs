//! Signal-to-channel table.
//!
//! Sixteen trim signals plus one always-on supply line map onto physical
//! output channels. The table is a compile-time constant of the board.

use crate::output::ChannelId;
use trim_proto::TrimSignal;

/// Channel mapping for the trim lines.
///
/// Customize this at compile-time by creating your own const. Check it with
/// [`ChannelTable::is_injective`] in a const assertion:
///
/// ```
/// use trim_core::{ChannelTable, DEFAULT_CHANNEL_TABLE};
///
/// const TABLE: ChannelTable = DEFAULT_CHANNEL_TABLE;
/// const _: () = assert!(TABLE.is_injective());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelTable {
    /// Channel asserted on every applied command (bandgap supply).
    pub always_on: ChannelId,
    /// Channel for each signal, indexed by bit position.
    pub signals: [ChannelId; 16],
}

/// Always-on line on channel 0, bit *i* on channel *i + 1*.
pub const DEFAULT_CHANNEL_TABLE: ChannelTable = ChannelTable {
    always_on: ChannelId(0),
    signals: [
        ChannelId(1),  // R3_IN0
        ChannelId(2),  // R3_IN1
        ChannelId(3),  // R3_IN2
        ChannelId(4),  // R3_IN3
        ChannelId(5),  // R2_IN0
        ChannelId(6),  // R2_IN1
        ChannelId(7),  // R2_IN2
        ChannelId(8),  // R2_IN3
        ChannelId(9),  // R1_IN0
        ChannelId(10), // R1_IN1
        ChannelId(11), // R1_IN2
        ChannelId(12), // R1_IN3
        ChannelId(13), // LDO0
        ChannelId(14), // LDO1
        ChannelId(15), // LDO2
        ChannelId(16), // LDO3
    ],
};

impl ChannelTable {
    /// Channel driven by `signal`.
    #[inline]
    #[must_use]
    pub const fn channel(&self, signal: TrimSignal) -> ChannelId {
        self.signals[signal.bit() as usize]
    }

    /// Check that no two lines (always-on included) share a channel.
    #[must_use]
    pub const fn is_injective(&self) -> bool {
        let mut i = 0;
        while i < 16 {
            if self.signals[i].0 == self.always_on.0 {
                return false;
            }
            let mut j = i + 1;
            while j < 16 {
                if self.signals[i].0 == self.signals[j].0 {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }

    /// Highest channel id used, for sizing a driver.
    #[must_use]
    pub const fn max_channel(&self) -> ChannelId {
        let mut max = self.always_on.0;
        let mut i = 0;
        while i < 16 {
            if self.signals[i].0 > max {
                max = self.signals[i].0;
            }
            i += 1;
        }
        ChannelId(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_injective() {
        assert!(DEFAULT_CHANNEL_TABLE.is_injective());
        assert_eq!(DEFAULT_CHANNEL_TABLE.max_channel(), ChannelId(16));
    }

    #[test]
    fn test_duplicate_signal_channel_detected() {
        let mut table = DEFAULT_CHANNEL_TABLE;
        table.signals[15] = table.signals[3];
        assert!(!table.is_injective());
    }

    #[test]
    fn test_always_on_collision_detected() {
        let mut table = DEFAULT_CHANNEL_TABLE;
        table.always_on = ChannelId(9);
        assert!(!table.is_injective());
    }

    #[test]
    fn test_channel_lookup() {
        assert_eq!(DEFAULT_CHANNEL_TABLE.channel(TrimSignal::R3In0), ChannelId(1));
        assert_eq!(DEFAULT_CHANNEL_TABLE.channel(TrimSignal::Ldo3), ChannelId(16));
    }
}
