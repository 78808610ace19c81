//! Shared helpers.

use std::borrow::Cow;

/// Decode bytes to a string, handling a byte-order mark and legacy encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. Falls back to Windows-1252 (common in exports from older editors)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8 without a BOM.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Parse the leading decimal integer of a form value.
///
/// Leading whitespace and a sign are allowed and parsing stops at the first
/// non-digit, so `"12abc"` is 12. Returns `None` when no digits are found or
/// the value does not fit in an `i64`.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
