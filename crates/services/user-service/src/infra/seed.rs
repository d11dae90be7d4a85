//! Seed file loading.
//!
//! A seed file is a JSON array of `{"login": .., "password": ..}` objects
//! used to pre-populate the in-memory store.

use std::fs;
use std::path::Path;

use validator::Validate;

use common::{AppError, AppResult};
use domain::User;

/// Read and parse a seed file.
pub fn load_seed(path: &Path) -> AppResult<Vec<User>> {
    let raw = fs::read_to_string(path)?;
    let users = parse_seed(&raw)?;
    tracing::info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Parse seed JSON. Every entry must have a non-empty login and password.
pub fn parse_seed(raw: &str) -> AppResult<Vec<User>> {
    let users: Vec<User> = serde_json::from_str(raw)?;

    for (index, user) in users.iter().enumerate() {
        if user.validate().is_err() {
            return Err(AppError::config(format!(
                "seed entry {} must have a non-empty login and password",
                index
            )));
        }
    }

    Ok(users)
}
