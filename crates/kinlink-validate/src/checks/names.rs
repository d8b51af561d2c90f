//! Name character checks.

/// True when `value` holds at least one ASCII letter.
pub fn has_alpha(value: &str) -> bool {
    value.bytes().any(|byte| byte.is_ascii_alphabetic())
}

/// True when `value` is made only of ASCII letters, spaces and hyphens.
///
/// The empty string passes; blank names are rejected by an earlier check.
pub fn has_allowed_chars(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_alphabetic() || ch == ' ' || ch == '-')
}
