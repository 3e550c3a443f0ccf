//! Human-readable diagnostic output.
//!
//! Everything here writes to a [`core::fmt::Write`] so the firmware can
//! render into a `heapless::String` and push it out over UART, and host
//! tests can render into a `String`. Output has no protocol meaning.

use crate::command::Command;
use crate::decode::DecodeError;
use crate::types::TrimValue;
use core::fmt::{self, Write};

/// Upper bound on the size of [`write_report`] output.
pub const MAX_REPORT_LEN: usize = 640;

/// Write `bytes` as text, replacing non-printable bytes other than CR/LF/tab
/// with `?`.
fn write_bytes<W: Write>(w: &mut W, bytes: &[u8]) -> fmt::Result {
    for &b in bytes {
        let c = match b {
            0x20..=0x7E | b'\r' | b'\n' | b'\t' => b as char,
            _ => '?',
        };
        w.write_char(c)?;
    }
    Ok(())
}

/// Echo a freshly tokenized command.
///
/// ```text
/// mode:Trim
/// setting:0x00FF
/// ```
///
/// The setting is echoed raw, so its own CRLF ends the second line.
pub fn write_command_echo<W: Write>(w: &mut W, cmd: &Command) -> fmt::Result {
    w.write_str("mode:")?;
    write_bytes(w, cmd.mode())?;
    w.write_str("\r\nsetting:")?;
    write_bytes(w, cmd.setting())?;
    w.write_str("\r\n")
}

/// Write the 16 bits of `value` MSB first, in nibble groups.
pub fn write_binary<W: Write>(w: &mut W, value: TrimValue) -> fmt::Result {
    for bit in (0..16u8).rev() {
        let set = (value.raw() >> bit) & 1;
        write!(w, "{}", set)?;
        if bit % 4 == 0 && bit != 0 {
            w.write_char(' ')?;
        }
    }
    Ok(())
}

/// Full report for an applied setting.
///
/// `clean_setting` is the setting after whitespace stripping.
pub fn write_report<W: Write>(
    w: &mut W,
    mode: &[u8],
    clean_setting: &[u8],
    value: TrimValue,
) -> fmt::Result {
    w.write_str("\r\n=== New Setting Received ===\r\n")?;
    w.write_str("Mode: ")?;
    write_bytes(w, mode)?;
    w.write_str("\r\nSetting string: '")?;
    write_bytes(w, clean_setting)?;
    w.write_str("'\r\n")?;
    write!(w, "16-bit value: {} (0x{:04X})\r\n", value.raw(), value.raw())?;
    w.write_str("Binary: ")?;
    write_binary(w, value)?;
    w.write_str("\r\n\r\nBit Allocation:\r\n")?;
    for (signal, set) in value.signals().rev() {
        let pad = if signal.bit() < 10 { "  " } else { " " };
        write!(
            w,
            "{:<6} (Bit {}):{}{}\r\n",
            signal.name(),
            signal.bit(),
            pad,
            u8::from(set)
        )?;
    }
    w.write_str("================================\r\n")
}

/// One-line description of a rejected setting.
pub fn write_decode_error<W: Write>(
    w: &mut W,
    err: DecodeError,
    clean_setting: &[u8],
) -> fmt::Result {
    match err {
        DecodeError::InvalidFormat => {
            w.write_str("Error: Invalid numeric string '")?;
            write_bytes(w, clean_setting)?;
            w.write_str("'\r\n")
        }
        DecodeError::OutOfRange => {
            w.write_str("Error: Value out of range (0-65535): ")?;
            write_bytes(w, clean_setting)?;
            w.write_str("\r\n")
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::String;

    use super::*;

    #[test]
    fn test_binary_nibble_groups() {
        let mut out = String::new();
        write_binary(&mut out, TrimValue(0xA5A5)).unwrap();
        assert_eq!(out, "1010 0101 1010 0101");
    }

    #[test]
    fn test_command_echo() {
        let cmd = Command::parse(b"Trim:0x00FF\r\n").unwrap();
        let mut out = String::new();
        write_command_echo(&mut out, &cmd).unwrap();
        assert_eq!(out, "mode:Trim\r\nsetting:0x00FF\r\n\r\n");
    }

    #[test]
    fn test_report_contents() {
        let mut out = String::new();
        write_report(&mut out, b"Trim", b"0x00FF", TrimValue(0x00FF)).unwrap();
        assert!(out.contains("Mode: Trim\r\n"));
        assert!(out.contains("Setting string: '0x00FF'\r\n"));
        assert!(out.contains("16-bit value: 255 (0x00FF)\r\n"));
        assert!(out.contains("Binary: 0000 0000 1111 1111\r\n"));
        assert!(out.contains("LDO3   (Bit 15): 0\r\n"));
        assert!(out.contains("R1_IN0 (Bit 8):  0\r\n"));
        assert!(out.contains("R2_IN3 (Bit 7):  1\r\n"));
        assert!(out.contains("R3_IN0 (Bit 0):  1\r\n"));
        assert!(out.len() <= MAX_REPORT_LEN);
    }

    #[test]
    fn test_report_lists_bits_msb_first() {
        let mut out = String::new();
        write_report(&mut out, b"Trim", b"1", TrimValue(1)).unwrap();
        let ldo3 = out.find("LDO3").unwrap();
        let r3_in0 = out.find("R3_IN0").unwrap();
        assert!(ldo3 < r3_in0);
    }

    #[test]
    fn test_non_printable_bytes_are_masked() {
        let mut out = String::new();
        write_decode_error(&mut out, DecodeError::InvalidFormat, b"1\x002").unwrap();
        assert_eq!(out, "Error: Invalid numeric string '1?2'\r\n");
    }

    #[test]
    fn test_out_of_range_message() {
        let mut out = String::new();
        write_decode_error(&mut out, DecodeError::OutOfRange, b"65536").unwrap();
        assert_eq!(out, "Error: Value out of range (0-65535): 65536\r\n");
    }
}
