//! Bit mapper: drives one trim word onto the output channels.

use crate::output::{ChannelDriver, OutputError};
use crate::table::ChannelTable;
use trim_proto::TrimValue;

/// Number of channel writes per dispatched value.
pub const WRITES_PER_DISPATCH: usize = 17;

/// Assert the always-on channel, then drive every signal from bit 0 to
/// bit 15.
///
/// All seventeen writes are attempted even if one fails; the first error is
/// returned. The writes are not atomic as a group.
pub fn dispatch<D: ChannelDriver + ?Sized>(
    value: TrimValue,
    table: &ChannelTable,
    driver: &mut D,
) -> Result<(), OutputError> {
    let mut result = driver.set_channel(table.always_on, true);

    for (signal, active) in value.signals() {
        let write = driver.set_channel(table.channel(signal), active);
        if result.is_ok() {
            result = write;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec::Vec;

    use super::*;
    use crate::output::ChannelId;
    use crate::table::DEFAULT_CHANNEL_TABLE;
    use trim_proto::TrimSignal;

    #[derive(Default)]
    struct RecordingDriver {
        writes: Vec<(ChannelId, bool)>,
        fail_on: Option<ChannelId>,
    }

    impl ChannelDriver for RecordingDriver {
        fn set_channel(&mut self, channel: ChannelId, active: bool) -> Result<(), OutputError> {
            self.writes.push((channel, active));
            if self.fail_on == Some(channel) {
                return Err(OutputError::Io);
            }
            Ok(())
        }
    }

    #[test]
    fn test_always_on_written_first() {
        let mut driver = RecordingDriver::default();
        dispatch(TrimValue::ZERO, &DEFAULT_CHANNEL_TABLE, &mut driver).unwrap();
        assert_eq!(driver.writes.len(), WRITES_PER_DISPATCH);
        assert_eq!(driver.writes[0], (DEFAULT_CHANNEL_TABLE.always_on, true));
        assert!(driver.writes[1..].iter().all(|&(_, active)| !active));
    }

    #[test]
    fn test_a5a5_active_set() {
        let mut driver = RecordingDriver::default();
        dispatch(TrimValue(0xA5A5), &DEFAULT_CHANNEL_TABLE, &mut driver).unwrap();

        // 0xA5A5 = 1010 0101 1010 0101
        let expected_high = [
            TrimSignal::R3In0,
            TrimSignal::R3In2,
            TrimSignal::R2In1,
            TrimSignal::R2In3,
            TrimSignal::R1In0,
            TrimSignal::R1In2,
            TrimSignal::Ldo1,
            TrimSignal::Ldo3,
        ];
        for (signal, &(channel, active)) in TrimSignal::ALL.iter().zip(&driver.writes[1..]) {
            assert_eq!(channel, DEFAULT_CHANNEL_TABLE.channel(*signal));
            assert_eq!(active, expected_high.contains(signal), "{:?}", signal);
        }
        assert_eq!(driver.writes[0], (DEFAULT_CHANNEL_TABLE.always_on, true));
    }

    #[test]
    fn test_each_channel_written_once() {
        let mut driver = RecordingDriver::default();
        dispatch(TrimValue(0xFFFF), &DEFAULT_CHANNEL_TABLE, &mut driver).unwrap();
        let mut channels: Vec<ChannelId> = driver.writes.iter().map(|&(c, _)| c).collect();
        channels.sort();
        channels.dedup();
        assert_eq!(channels.len(), WRITES_PER_DISPATCH);
    }

    #[test]
    fn test_failure_still_attempts_remaining_writes() {
        let mut driver = RecordingDriver {
            fail_on: Some(DEFAULT_CHANNEL_TABLE.channel(TrimSignal::R2In0)),
            ..Default::default()
        };
        let result = dispatch(TrimValue(0x00FF), &DEFAULT_CHANNEL_TABLE, &mut driver);
        assert_eq!(result, Err(OutputError::Io));
        assert_eq!(driver.writes.len(), WRITES_PER_DISPATCH);
    }
}
