//! Setting field decoder.
//!
//! Turns the raw setting field (which still carries the line terminator)
//! into a [`TrimValue`]. Accepted literals:
//!
//! - decimal: one or more ASCII digits, `0`..=`65535`
//! - hexadecimal: `0x`/`0X` followed by one or more hex digits,
//!   `0x0`..=`0xFFFF`
//!
//! Trailing CR, LF, space and tab are ignored. Anything else is rejected.

use crate::types::TrimValue;
use heapless::Vec;

/// Usable length of the cleaned setting string.
pub const SCRATCH_LEN: usize = 19;

/// Cleaned setting bytes, at most [`SCRATCH_LEN`] long.
pub type CleanSetting = Vec<u8, SCRATCH_LEN>;

/// Error type for setting decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Not a decimal or `0x` hexadecimal literal.
    InvalidFormat,
    /// Literal is well-formed but larger than 65535.
    OutOfRange,
}

/// Copy the first [`SCRATCH_LEN`] bytes of `raw` and strip trailing
/// whitespace from the copy.
#[must_use]
pub fn clean_setting(raw: &[u8]) -> CleanSetting {
    let head = &raw[..raw.len().min(SCRATCH_LEN)];
    let end = head
        .iter()
        .rposition(|&b| !matches!(b, b'\r' | b'\n' | b' ' | b'\t'))
        .map_or(0, |i| i + 1);
    // Cannot fail: `head` is at most SCRATCH_LEN bytes.
    Vec::from_slice(&head[..end]).unwrap_or_default()
}

/// Decode a raw setting field.
///
/// # Example
///
/// ```
/// use trim_proto::{decode_setting, DecodeError, TrimValue};
///
/// assert_eq!(decode_setting(b"4095\r\n"), Ok(TrimValue(4095)));
/// assert_eq!(decode_setting(b"0x00FF"), Ok(TrimValue(0xFF)));
/// assert_eq!(decode_setting(b"65536"), Err(DecodeError::OutOfRange));
/// assert_eq!(decode_setting(b"12a"), Err(DecodeError::InvalidFormat));
/// ```
pub fn decode_setting(raw: &[u8]) -> Result<TrimValue, DecodeError> {
    decode_clean(&clean_setting(raw))
}

/// Decode an already cleaned setting (see [`clean_setting`]).
pub fn decode_clean(clean: &[u8]) -> Result<TrimValue, DecodeError> {
    let (radix, digits) = match clean {
        [b'0', b'x' | b'X', rest @ ..] => (16, rest),
        _ => (10, clean),
    };

    if digits.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    // Format is checked over the whole literal before range.
    if digits.iter().any(|&b| digit_value(b, radix).is_none()) {
        return Err(DecodeError::InvalidFormat);
    }

    let mut value: u32 = 0;
    for &b in digits {
        let digit = digit_value(b, radix).ok_or(DecodeError::InvalidFormat)?;
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::OutOfRange)?;
    }

    let value = u16::try_from(value).map_err(|_| DecodeError::OutOfRange)?;
    Ok(TrimValue(value))
}

/// Convert an ASCII digit in `radix` (10 or 16) to its value.
#[inline]
fn digit_value(b: u8, radix: u32) -> Option<u32> {
    let value = match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' if radix == 16 => b - b'a' + 10,
        b'A'..=b'F' if radix == 16 => b - b'A' + 10,
        _ => return None,
    };
    Some(u32::from(value))
}
