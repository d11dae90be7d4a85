//! User domain entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User domain entity.
///
/// The login is the natural key. Fields missing from JSON input deserialize
/// as empty strings, so an absent field and an empty one fail validation the
/// same way.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct User {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub login: String,
    #[serde(default, skip_serializing)]
    #[validate(length(min = 1))]
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl User {
    /// Create a new user from raw credentials
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}
