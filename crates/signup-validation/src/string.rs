//! String validation functions

/// A value counts as present when it has at least one character.
///
/// Whitespace is not trimmed: `" "` is present.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Length as a browser reports it: UTF-16 code units, so characters outside
/// the Basic Multilingual Plane count twice.
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Exactly `count` ASCII decimal digits and nothing else.
pub fn is_digits_exact(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

/// Equality validators
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}
