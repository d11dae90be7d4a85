//! User service - Registration and deletion use cases.
//!
//! All decision-making lives here; persistence and the privilege check
//! belong to the repository.

use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use domain::{is_weak_password, DomainError, DomainResult, RepositoryError, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
pub trait UserService: Send + Sync {
    /// Register a new user.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. empty login or password -> `InvalidArgument`
    /// 2. login already taken -> `UserAlreadyRegistered`
    /// 3. digits-only password -> `WeakPassword`
    ///
    /// The repository's `save` is only reached when every check passes.
    fn register(&self, user: User) -> DomainResult<User>;

    /// Delete a user by login.
    ///
    /// A privilege failure from the repository is reported as
    /// `NotAuthorized`, keeping the original error as its cause.
    fn delete(&self, login: &str) -> DomainResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

impl UserService for UserManager {
    fn register(&self, user: User) -> DomainResult<User> {
        debug!(login = %user.login, "Registering user");

        if let Err(errors) = user.validate() {
            warn!("Rejected registration: {}", errors);
            return Err(DomainError::invalid_argument(errors.to_string()));
        }

        if self.repo.find_by_login(&user.login)?.is_some() {
            warn!(login = %user.login, "Rejected registration: login taken");
            return Err(DomainError::already_registered(user.login));
        }

        if is_weak_password(&user.password) {
            warn!(login = %user.login, "Rejected registration: weak password");
            return Err(DomainError::WeakPassword);
        }

        let saved = self.repo.save(user)?;
        info!(login = %saved.login, "User registered");
        Ok(saved)
    }

    fn delete(&self, login: &str) -> DomainResult<()> {
        debug!(login, "Deleting user");

        self.repo.delete_by_login(login).map_err(|err| match err {
            RepositoryError::UnsupportedOperation(_) => {
                warn!(login, cause = %err, "Rejected deletion: insufficient privileges");
                DomainError::not_authorized(err)
            }
            other => DomainError::Repository(other),
        })?;

        info!(login, "User deleted");
        Ok(())
    }
}
