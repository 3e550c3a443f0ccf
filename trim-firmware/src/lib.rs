//! UART trim controller firmware for RP2040.
//!
//! Receives `<mode>:<setting>\r\n` commands over UART and drives seventeen
//! GPIO outputs: an always-on bandgap supply line and sixteen trim lines
//! selected by the bits of the setting.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | UART1 TX | 8    | Startup banner and diagnostics |
//! | UART1 RX | 9    | Command input |
//! | BG_VDD   | 2    | Always-on supply line |
//! | R3_IN0..R3_IN3 | 3-6 | Trim bits 0-3 |
//! | R2_IN0 | 7 | Trim bit 4 |
//! | R2_IN1..R2_IN3 | 10-12 | Trim bits 5-7 |
//! | R1_IN0..R1_IN3 | 13-16 | Trim bits 8-11 |
//! | LDO0..LDO3 | 17-20 | Trim bits 12-15 |
//!
//! # Architecture
//!
//! Two Embassy tasks share a [`CommandMailbox`] with "latest value wins"
//! semantics:
//!
//! - **Input Task**: reads UART, frames and tokenizes lines, publishes commands
//! - **Apply Task**: once per [`POLL_INTERVAL`](config::POLL_INTERVAL), takes
//!   the pending command and runs it through the [`TrimController`]
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`diagnostics`** (default): Echo each command and print a report for
//!   every applied setting on UART TX
//!
//! # Re-exports
//!
//! This crate re-exports the pipeline types from [`trim_core`] for
//! convenience, so the binary only needs to depend on this crate.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features");

pub use trim_core::{
    ChannelDriver, ChannelId, ChannelTable, CommandForwarder, CommandMailbox, CommandSource,
    InputError, Outcome, OutputError, PinBank, TrimController, TrimError,
};

pub mod config;
pub mod console;
pub mod uart_input;

pub use console::Console;
pub use uart_input::UartCommandSource;
