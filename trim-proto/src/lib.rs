//! UART protocol pieces for the trim controller.
//!
//! This crate provides everything needed to turn a byte stream into trim
//! settings, without touching any hardware:
//!
//! - **Framing**: [`LineFramer`] collects bytes into CRLF-terminated lines
//! - **Tokenizing**: [`split()`] extracts delimiter-indexed fields,
//!   [`Command`] holds the `mode` and `setting` fields of one line
//! - **Decoding**: [`decode_setting()`] validates and parses the setting
//!   into a [`TrimValue`]
//! - **Types**: [`TrimValue`] and the sixteen named [`TrimSignal`] lines
//! - **Diagnostics**: [`report`] renders human-readable output
//!
//! # Protocol Format
//!
//! ```text
//! <mode>:<setting>\r\n
//! ```
//!
//! - `mode` - free text; a command is a trim command if it contains `Trim`
//! - `setting` - decimal (`0`..`65535`) or `0x`-prefixed hex (`0x0`..`0xFFFF`)
//!
//! Examples: `Trim:0`, `Trim:4095`, `Trim:0x1234`, `Trim:65535`, `Trim:0x00FF`.
//!
//! # Example
//!
//! ```
//! use trim_proto::{decode_setting, Command, LineFramer, TrimSignal};
//!
//! let mut framer: LineFramer = LineFramer::new();
//! let mut command = None;
//! for &b in b"Trim:0x00FF\r\n" {
//!     if let Some(Ok(line)) = framer.push(b) {
//!         command = Command::parse(line).ok();
//!     }
//! }
//!
//! let command = command.unwrap();
//! assert!(command.is_trim());
//! let value = decode_setting(command.setting()).unwrap();
//! assert_eq!(value.raw(), 255);
//! assert!(value.is_set(TrimSignal::R2In3));
//! assert!(!value.is_set(TrimSignal::R1In0));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod command;
pub mod decode;
pub mod framer;
pub mod report;
pub mod split;
pub mod types;

// Re-export types at crate root for convenience
pub use command::{
    Command, TokenizeError, FIELD_DELIMITER, MODE_CAPACITY, SETTING_CAPACITY, TRIM_KEYWORD,
};
pub use decode::{clean_setting, decode_clean, decode_setting, CleanSetting, DecodeError};
pub use framer::{FrameError, LineFramer, MAX_LINE_LENGTH};
pub use split::{field, split, SplitError};
pub use types::{TrimSignal, TrimValue};
