//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Accounts
// =============================================================================

/// Login of the single account allowed to delete users
pub const ADMIN_LOGIN: &str = "Admin";

/// Check if a login belongs to the administrator (case-sensitive)
pub fn is_admin_login(login: &str) -> bool {
    login == ADMIN_LOGIN
}

// =============================================================================
// Validation
// =============================================================================

/// Passwords matching this pattern in full are rejected as too simple
pub const WEAK_PASSWORD_PATTERN: &str = r"^[0-9]+$";
