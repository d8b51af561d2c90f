//! Email address format check.
//!
//! Accepts `local@domain` where the local part is a dot-atom and the domain is
//! a dotted host name. Quoted local parts and address literals are rejected.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("Invalid email regex")
});

/// True when `email` is well formed and its local part has at most
/// `max_local_len` characters.
pub fn is_valid_email(email: &str, max_local_len: usize) -> bool {
    let local_part = email.split('@').next().unwrap_or_default();
    EMAIL_REGEX.is_match(email) && local_part.chars().count() <= max_local_len
}
