//! Platform-agnostic trim command pipeline.
//!
//! This crate ties the protocol pieces from [`trim_proto`] to hardware
//! through two small traits, so the whole path from received bytes to driven
//! output channels can be exercised on the host.
//!
//! # Overview
//!
//! - [`input`]: Command source trait ([`CommandSource`])
//! - [`assembler`]: Byte-at-a-time framing and tokenizing ([`CommandAssembler`])
//! - [`mailbox`]: Single-slot handoff between tasks ([`CommandMailbox`])
//! - [`forwarder`]: Producer loop, source to mailbox ([`CommandForwarder`])
//! - [`controller`]: Decode and change detection ([`TrimController`])
//! - [`dispatch`]: Drives a [`TrimValue`](trim_proto::TrimValue) onto channels
//! - [`table`]: Signal-to-channel mapping ([`ChannelTable`])
//! - [`output`]: Channel driver trait ([`ChannelDriver`], [`PinBank`])
//!
//! # Data Flow
//!
//! ```text
//! bytes -> CommandAssembler -> CommandForwarder -> CommandMailbox
//!       -> TrimController (decode, compare) -> dispatch -> ChannelDriver
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded targets)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod assembler;
pub mod controller;
pub mod dispatch;
pub mod forwarder;
pub mod input;
pub mod mailbox;
pub mod output;
pub mod table;

pub use assembler::CommandAssembler;
pub use controller::{Outcome, TrimController, TrimError};
pub use dispatch::{dispatch, WRITES_PER_DISPATCH};
pub use forwarder::CommandForwarder;
pub use input::{CommandSource, InputError};
pub use mailbox::CommandMailbox;
pub use output::{ChannelDriver, ChannelId, OutputError, PinBank};
pub use table::{ChannelTable, DEFAULT_CHANNEL_TABLE};
