//! Password policy applied at registration.
//!
//! Storage and hashing are the repository's concern; this module only
//! decides whether a plain-text password is acceptable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::WEAK_PASSWORD_PATTERN;

static WEAK_PASSWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(WEAK_PASSWORD_PATTERN).expect("weak password pattern is valid"));

/// Check whether a password is too simple to accept.
///
/// A password is weak when it is non-empty and made up entirely of ASCII
/// decimal digits, e.g. `"123432"`.
pub fn is_weak_password(password: &str) -> bool {
    WEAK_PASSWORD.is_match(password)
}
