//! Delimiter-indexed field extraction.
//!
//! Field numbering is 1-based and asymmetric:
//!
//! - field 1 is the prefix of the line up to the first delimiter;
//! - field N > 1 starts after the (N-1)-th delimiter and runs to the next
//!   delimiter or, when there is none, to the end of the line.
//!
//! The second rule is what lets `Trim:4095\r\n` yield `4095\r\n` as its
//! setting with or without a trailing delimiter.

/// Argument or length error from [`split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SplitError {
    /// Empty delimiter or index 0.
    InvalidArgument,
    /// Line is shorter than the delimiter.
    LineTooShort,
}

impl SplitError {
    /// Legacy negative status code (-1 / -2).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            SplitError::InvalidArgument => -1,
            SplitError::LineTooShort => -2,
        }
    }
}

/// Copy field `index` of `line` into `dest`.
///
/// Returns the number of bytes copied. `Ok(0)` means the field is missing,
/// empty, or longer than `dest`; in those cases `dest` is left untouched.
///
/// # Example
///
/// ```
/// use trim_proto::split;
///
/// let line = b"Trim:4095\r\n";
/// let mut buf = [0u8; 32];
///
/// let len = split(line, b":", 2, &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"4095\r\n");
///
/// let len = split(line, b":", 1, &mut buf).unwrap();
/// assert_eq!(&buf[..len], b"Trim");
/// ```
pub fn split(
    line: &[u8],
    delimiter: &[u8],
    index: usize,
    dest: &mut [u8],
) -> Result<usize, SplitError> {
    match field(line, delimiter, index)? {
        Some(field) if !field.is_empty() && field.len() <= dest.len() => {
            dest[..field.len()].copy_from_slice(field);
            Ok(field.len())
        }
        _ => Ok(0),
    }
}

/// Borrowing variant of [`split`]: locate field `index` without copying.
///
/// Returns `Ok(None)` if the field does not exist. Field 1 only exists when
/// the line contains at least one delimiter.
pub fn field<'a>(
    line: &'a [u8],
    delimiter: &[u8],
    index: usize,
) -> Result<Option<&'a [u8]>, SplitError> {
    if delimiter.is_empty() || index == 0 {
        return Err(SplitError::InvalidArgument);
    }
    if line.len() < delimiter.len() {
        return Err(SplitError::LineTooShort);
    }

    let mut occurrences = Occurrences::new(line, delimiter);

    if index == 1 {
        return Ok(occurrences.next().map(|end| &line[..end]));
    }

    let Some(open) = occurrences.nth(index - 2) else {
        return Ok(None);
    };
    let start = open + delimiter.len();
    let end = occurrences.next().unwrap_or(line.len());
    Ok(Some(&line[start..end]))
}

/// Non-overlapping delimiter positions, left to right.
struct Occurrences<'a> {
    line: &'a [u8],
    delimiter: &'a [u8],
    pos: usize,
}

impl<'a> Occurrences<'a> {
    fn new(line: &'a [u8], delimiter: &'a [u8]) -> Self {
        Self {
            line,
            delimiter,
            pos: 0,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let rest = self.line.get(self.pos..)?;
        let offset = rest
            .windows(self.delimiter.len())
            .position(|w| w == self.delimiter)?;
        let found = self.pos + offset;
        self.pos = found + self.delimiter.len();
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_field_keeps_terminator() {
        let line = b"Trim:4095\r\n";
        let mut buf = [0u8; 32];
        let len = split(line, b":", 2, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"4095\r\n");
    }

    #[test]
    fn test_mode_field_is_prefix() {
        let line = b"Trim:4095\r\n";
        let mut buf = [0u8; 16];
        let len = split(line, b":", 1, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"Trim");
    }

    #[test]
    fn test_middle_field_stops_at_next_delimiter() {
        let line = b"a:bb:ccc:dddd";
        let mut buf = [0u8; 8];
        assert_eq!(split(line, b":", 2, &mut buf), Ok(2));
        assert_eq!(&buf[..2], b"bb");
        assert_eq!(split(line, b":", 3, &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"ccc");
        assert_eq!(split(line, b":", 4, &mut buf), Ok(4));
        assert_eq!(&buf[..4], b"dddd");
        assert_eq!(split(line, b":", 5, &mut buf), Ok(0));
    }

    #[test]
    fn test_multibyte_delimiter() {
        let line = b"one::two::three";
        let mut buf = [0u8; 8];
        assert_eq!(split(line, b"::", 1, &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"one");
        assert_eq!(split(line, b"::", 2, &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"two");
        assert_eq!(split(line, b"::", 3, &mut buf), Ok(5));
        assert_eq!(&buf[..5], b"three");
    }

    #[test]
    fn test_first_field_needs_delimiter() {
        let mut buf = [0u8; 16];
        assert_eq!(split(b"Trim4095\r\n", b":", 1, &mut buf), Ok(0));
        assert_eq!(split(b"Trim4095\r\n", b":", 2, &mut buf), Ok(0));
    }

    #[test]
    fn test_empty_field_returns_zero() {
        let mut buf = [0u8; 16];
        assert_eq!(split(b":4095", b":", 1, &mut buf), Ok(0));
        assert_eq!(split(b"Trim:", b":", 2, &mut buf), Ok(0));
        assert_eq!(split(b"Trim::1", b":", 2, &mut buf), Ok(0));
    }

    #[test]
    fn test_oversized_field_is_not_copied() {
        let mut buf = [b'x'; 4];
        assert_eq!(split(b"Trim:123456", b":", 2, &mut buf), Ok(0));
        assert_eq!(&buf, b"xxxx");
        assert_eq!(split(b"LongMode:1", b":", 1, &mut buf), Ok(0));
        assert_eq!(&buf, b"xxxx");
    }

    #[test]
    fn test_destination_tail_not_cleared() {
        let mut buf = [b'x'; 8];
        assert_eq!(split(b"Trim:12", b":", 2, &mut buf), Ok(2));
        assert_eq!(&buf, b"12xxxxxx");
    }

    #[test]
    fn test_argument_errors() {
        let mut buf = [0u8; 8];
        assert_eq!(
            split(b"Trim:1", b"", 1, &mut buf),
            Err(SplitError::InvalidArgument)
        );
        assert_eq!(
            split(b"Trim:1", b":", 0, &mut buf),
            Err(SplitError::InvalidArgument)
        );
        assert_eq!(split(b"", b":", 1, &mut buf), Err(SplitError::LineTooShort));
        assert_eq!(split(b"a", b"::", 1, &mut buf), Err(SplitError::LineTooShort));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SplitError::InvalidArgument.code(), -1);
        assert_eq!(SplitError::LineTooShort.code(), -2);
    }
}
