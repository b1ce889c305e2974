use crate::error::WireError;
use crate::token::MINUS;

/// Digits needed for the largest 64-bit magnitude (`u64::MAX` has 20).
pub const MAX_DECIMAL_DIGITS: usize = 20;

/// Longest canonical integer body: optional sign plus 20 digits.
pub const MAX_INTEGER_LEN: usize = MAX_DECIMAL_DIGITS + 1;

/// A decoded integer body.
///
/// Values that fit `i64` are always `Signed`; `Unsigned` only appears for
/// magnitudes in `i64::MAX + 1 ..= u64::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Integer {
    Signed(i64),
    Unsigned(u64),
}

// ── Formatting ────────────────────────────────────────────────────────

/// Format `value` as ASCII decimal into the tail of `buf`.
///
/// Returns the written slice. A 21-byte buffer always suffices.
///
/// | Value         | Output                   |
/// |---------------|--------------------------|
/// | 0             | `0`                      |
/// | 42            | `42`                     |
/// | `u64::MAX`    | `18446744073709551615`   |
#[allow(clippy::cast_possible_truncation)]
pub fn format_u64(mut value: u64, buf: &mut [u8; MAX_INTEGER_LEN]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        // value % 10 is always < 10
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}

/// Format `value` as ASCII decimal with a leading `-` for negatives.
pub fn format_i64(value: i64, buf: &mut [u8; MAX_INTEGER_LEN]) -> &[u8] {
    let digits = format_u64(value.unsigned_abs(), buf).len();
    let mut start = buf.len() - digits;
    if value < 0 {
        start -= 1;
        buf[start] = MINUS;
    }
    &buf[start..]
}

/// Number of ASCII digits `value` formats to.
#[must_use]
pub fn unsigned_len(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Number of bytes `value` formats to, sign included.
#[must_use]
pub fn signed_len(value: i64) -> usize {
    unsigned_len(value.unsigned_abs()) + usize::from(value < 0)
}

// ── Parsing ───────────────────────────────────────────────────────────

/// Parse a byte string length prefix (the bytes before `:`).
///
/// `offset` is the position of the first prefix byte and is only used for
/// error reporting.
///
/// # Errors
///
/// [`WireError::InvalidLength`] if the prefix is empty, contains a
/// non-digit, has a leading zero, or overflows `usize`.
pub fn parse_length(digits: &[u8], offset: usize) -> Result<usize, WireError> {
    let invalid = |reason| WireError::InvalidLength { offset, reason };

    if digits.is_empty() {
        return Err(invalid("empty length prefix"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("non-digit byte in length prefix"));
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(invalid("leading zero in length prefix"));
    }

    digits
        .iter()
        .try_fold(0usize, |acc, &d| {
            acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
        })
        .ok_or_else(|| invalid("length prefix overflows usize"))
}

/// Parse an integer body (the bytes between `i` and `e`).
///
/// Accepts `0`, or an optional `-` followed by a digit run with no leading
/// zero. Signed parsing is tried first; non-negative values above
/// `i64::MAX` promote to [`Integer::Unsigned`].
///
/// # Errors
///
/// [`WireError::InvalidInteger`] for an empty body, a bare `-`, any
/// non-digit (including `+`), a leading zero, `-0`, or a value outside
/// `i64::MIN ..= u64::MAX`.
pub fn parse_integer(body: &[u8], offset: usize) -> Result<Integer, WireError> {
    let invalid = |reason| WireError::InvalidInteger { offset, reason };

    let (negative, digits) = match body.split_first() {
        None => return Err(invalid("empty integer")),
        Some((&MINUS, rest)) => (true, rest),
        Some(_) => (false, body),
    };

    if digits.is_empty() {
        return Err(invalid("missing digits after '-'"));
    }
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid("non-digit byte in integer"));
    }
    if digits.len() > 1 && digits[0] == b'0' {
        return Err(invalid("leading zero"));
    }
    if negative && digits == b"0" {
        return Err(invalid("negative zero"));
    }

    let magnitude = digits
        .iter()
        .try_fold(0u64, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
        })
        .ok_or_else(|| invalid("integer exceeds 64-bit range"))?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
            .map(Integer::Signed)
            .ok_or_else(|| invalid("integer below signed 64-bit minimum"))
    } else {
        Ok(i64::try_from(magnitude).map_or(Integer::Unsigned(magnitude), Integer::Signed))
    }
}
