//! Token-level syntax checks.
//!
//! These predicates decide exactly which tokens are accepted; their
//! boundaries show up directly in error messages.

/// Check an identifier: a letter or `_`, then letters, digits or `_`.
///
/// Only ASCII characters are accepted. Case-sensitive.
pub fn is_valid_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check a signed decimal integer without leading zeros.
///
/// `"0"` is the only token allowed to start with a zero, so `"-0"` and
/// `"-01"` are rejected along with `"00"` and a bare `"-"`.
pub fn is_valid_integer(token: &str) -> bool {
    if token == "0" {
        return true;
    }
    let digits = token.strip_prefix('-').unwrap_or(token);
    is_valid_positive_integer(digits)
}

/// Check a strictly positive decimal integer without leading zeros.
pub fn is_valid_positive_integer(token: &str) -> bool {
    match token.as_bytes() {
        [] | [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}
