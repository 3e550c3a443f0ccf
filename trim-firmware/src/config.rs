//! Compile-time board configuration.

use embassy_time::Duration;
use trim_core::{ChannelTable, DEFAULT_CHANNEL_TABLE};

/// UART1 baud rate (8N1).
pub const BAUDRATE: u32 = 115_200;

/// How often the apply task looks for a new command.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Printed after the startup line.
pub const FIRMWARE_VERSION: &str = "20250915";

/// Number of GPIO outputs in the channel bank: BG_VDD plus sixteen trim lines.
pub const CHANNEL_COUNT: usize = 17;

/// Channel `i` is the `i`-th pin handed to the bank in `main`.
pub const CHANNEL_TABLE: ChannelTable = DEFAULT_CHANNEL_TABLE;

/// Echo commands and print reports on UART TX.
pub const DIAGNOSTICS: bool = cfg!(feature = "diagnostics");

const _: () = assert!(CHANNEL_TABLE.is_injective());
const _: () = assert!(CHANNEL_TABLE.max_channel().index() < CHANNEL_COUNT);
