//! Domain-level errors.
//!
//! These errors represent business rule violations and the failures a user
//! repository may report. They are independent of how the service is exposed.

use thiserror::Error;

use crate::locale::Locale;

/// Failures reported by a user repository implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The caller is not allowed to perform the operation.
    /// The message is implementation-specific and not meant for end users.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Backing storage failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Create an unsupported operation error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        RepositoryError::UnsupportedOperation(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        RepositoryError::Storage(msg.into())
    }
}

/// Domain-specific errors for registration and deletion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required field missing or empty. Signals caller misuse.
    #[error("Field validation error")]
    InvalidArgument(String),

    /// Another user already owns this login
    #[error("User with login '{login}' is already registered")]
    UserAlreadyRegistered { login: String },

    /// Password consists of digits only
    #[error("Password does not meet security requirements")]
    WeakPassword,

    /// Caller lacks privileges; `cause` keeps the repository's own report
    #[error("Insufficient privileges to perform this operation")]
    NotAuthorized {
        #[source]
        cause: RepositoryError,
    },

    /// Any other repository failure, passed through unchanged
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Create an invalid argument error; `detail` is kept for diagnostics
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        DomainError::InvalidArgument(detail.into())
    }

    /// Create a duplicate login error
    pub fn already_registered(login: impl Into<String>) -> Self {
        DomainError::UserAlreadyRegistered {
            login: login.into(),
        }
    }

    /// Wrap a repository authorization failure
    pub fn not_authorized(cause: RepositoryError) -> Self {
        DomainError::NotAuthorized { cause }
    }

    /// Whether callers are expected to handle this error as a business outcome.
    ///
    /// `InvalidArgument` is the only unchecked kind: it means the caller
    /// passed malformed input rather than hitting a business rule.
    pub fn is_checked(&self) -> bool {
        !matches!(self, DomainError::InvalidArgument(_))
    }

    /// Underlying repository error, if any
    pub fn repository_cause(&self) -> Option<&RepositoryError> {
        match self {
            DomainError::NotAuthorized { cause } | DomainError::Repository(cause) => Some(cause),
            _ => None,
        }
    }

    /// Message suitable for showing to the end user in the given language.
    ///
    /// Repository failures get a fixed message; their detail stays in
    /// `Display` for logs.
    pub fn user_message(&self, locale: Locale) -> String {
        match (self, locale) {
            (DomainError::Repository(_), Locale::En) => "User storage error".to_string(),
            (_, Locale::En) => self.to_string(),
            (DomainError::InvalidArgument(_), Locale::Ru) => "Ошибка в заполнении полей".to_string(),
            (DomainError::UserAlreadyRegistered { login }, Locale::Ru) => {
                format!("Пользователь с логином '{}' уже зарегистрирован", login)
            }
            (DomainError::WeakPassword, Locale::Ru) => {
                "Пароль не соответствует требованиям безопасности".to_string()
            }
            (DomainError::NotAuthorized { .. }, Locale::Ru) => {
                "Недостаточно прав для выполнения операции".to_string()
            }
            (DomainError::Repository(_), Locale::Ru) => "Ошибка хранилища пользователей".to_string(),
        }
    }
}

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
