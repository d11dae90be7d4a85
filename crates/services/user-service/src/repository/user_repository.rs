//! User repository trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use domain::{is_admin_login, RepositoryError, RepositoryResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations own the privilege check for deletion: `delete_by_login`
/// must fail with [`RepositoryError::UnsupportedOperation`] when the acting
/// caller is not the administrator.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find user by login (exact match)
    fn find_by_login(&self, login: &str) -> RepositoryResult<Option<User>>;

    /// Persist a user, returning the stored value
    fn save(&self, user: User) -> RepositoryResult<User>;

    /// Delete user by login (administrator only)
    fn delete_by_login(&self, login: &str) -> RepositoryResult<()>;
}

/// In-memory implementation of UserRepository, acting on behalf of one caller.
pub struct UserStore {
    actor: String,
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Create an empty store for the given acting caller
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-populate the store, later entries replacing earlier ones
    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (user.login.clone(), user))
            .collect();
        Self {
            actor: self.actor,
            users: RwLock::new(map),
        }
    }

    /// Login of the caller this store acts for
    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, login: &str) -> RepositoryResult<bool> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.contains_key(login))
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::storage("user store lock poisoned")
}

impl UserRepository for UserStore {
    fn find_by_login(&self, login: &str) -> RepositoryResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(login).cloned())
    }

    fn save(&self, user: User) -> RepositoryResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(user.login.clone(), user.clone());
        Ok(user)
    }

    fn delete_by_login(&self, login: &str) -> RepositoryResult<()> {
        if !is_admin_login(&self.actor) {
            return Err(RepositoryError::unsupported(format!(
                "delete_by_login is not supported for caller '{}'",
                self.actor
            )));
        }

        // Deleting an unknown login is a no-op
        let mut users = self.users.write().map_err(poisoned)?;
        users.remove(login);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use domain::ADMIN_LOGIN;

    use super::*;

    #[test]
    fn test_save_and_find() {
        let store = UserStore::new("guest");
        let saved = store.save(User::new("bob", "s3cret!")).unwrap();

        assert_eq!(saved, User::new("bob", "s3cret!"));
        assert_eq!(store.find_by_login("bob").unwrap(), Some(saved));
        assert_eq!(store.find_by_login("Bob").unwrap(), None);
    }

    #[test]
    fn test_with_users() {
        let store = UserStore::new("guest")
            .with_users([User::new("alice", "pw1"), User::new("bob", "pw2")]);

        assert_eq!(store.len().unwrap(), 2);
        assert!(store.contains("alice").unwrap());
        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn test_delete_as_non_admin_is_unsupported() {
        let store = UserStore::new("bob").with_users([User::new("alice", "pw")]);

        let err = store.delete_by_login("alice").unwrap_err();
        assert!(matches!(err, RepositoryError::UnsupportedOperation(_)));
        assert!(store.contains("alice").unwrap());
    }

    #[test]
    fn test_delete_as_admin() {
        let store = UserStore::new(ADMIN_LOGIN).with_users([User::new("alice", "pw")]);

        store.delete_by_login("alice").unwrap();
        assert!(store.is_empty().unwrap());

        // Unknown login
        store.delete_by_login("nobody").unwrap();
    }

    #[test]
    fn test_poisoned_lock_is_storage_error() {
        let store = Arc::new(UserStore::new(ADMIN_LOGIN).with_users([User::new("alice", "pw")]));

        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.users.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let storage = RepositoryError::storage("user store lock poisoned");
        assert_eq!(store.len().unwrap_err(), storage);
        assert_eq!(store.is_empty().unwrap_err(), storage);
        assert_eq!(store.contains("alice").unwrap_err(), storage);
        assert_eq!(store.find_by_login("alice").unwrap_err(), storage);
        assert_eq!(store.delete_by_login("alice").unwrap_err(), storage);
    }
}
