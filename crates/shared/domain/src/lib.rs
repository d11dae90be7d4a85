//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the `User` entity, the registration password policy, and the error
//! taxonomy shared by repositories and services.

pub mod constants;
pub mod error;
pub mod locale;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult, RepositoryError, RepositoryResult};
pub use locale::Locale;
pub use password::is_weak_password;
pub use user::User;
