//! Syntactic checks applied to every notification request.
//!
//! These are sanity checks only: an address that passes is shaped like
//! `local@domain.tld`, nothing is said about whether it can receive mail.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled once, shared read-only by every handler invocation.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.%+-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Returns `true` when `email` looks like `local@domain.tld`.
///
/// Word characters are ASCII letters, digits and `_`. The local part may also
/// hold `.`, `%`, `+` and `-`, the domain `.` and `-`. The final label must be
/// at least two ASCII letters.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns `true` for any string with at least one character.
///
/// Whitespace is not trimmed, so `" "` counts as a message.
pub const fn is_non_empty_message(message: &str) -> bool {
    !message.is_empty()
}
