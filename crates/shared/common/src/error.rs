//! Unified error handling at the application boundary.
//!
//! Wraps domain failures together with the I/O and configuration errors a
//! service binary can hit, and converts them to:
//! - Stable machine-readable codes
//! - Process exit codes (sysexits conventions)
//! - Localized JSON error bodies

use domain::{DomainError, Locale};
use serde::Serialize;
use thiserror::Error;

/// Process exit codes, following `sysexits.h`
pub mod exit_code {
    pub const USAGE: i32 = 64;
    pub const DATA_ERROR: i32 = 65;
    pub const SOFTWARE: i32 = 70;
    pub const IO_ERROR: i32 = 74;
    pub const NO_PERMISSION: i32 = 77;
    pub const CONFIG: i32 = 78;
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::InvalidArgument(_)) => "INVALID_ARGUMENT",
            AppError::Domain(DomainError::UserAlreadyRegistered { .. }) => {
                "USER_ALREADY_REGISTERED"
            }
            AppError::Domain(DomainError::WeakPassword) => "WEAK_PASSWORD",
            AppError::Domain(DomainError::NotAuthorized { .. }) => "NOT_AUTHORIZED",
            AppError::Domain(DomainError::Repository(_)) => "REPOSITORY_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Get process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(DomainError::InvalidArgument(_)) => exit_code::USAGE,
            AppError::Domain(DomainError::UserAlreadyRegistered { .. })
            | AppError::Domain(DomainError::WeakPassword) => exit_code::DATA_ERROR,
            AppError::Domain(DomainError::NotAuthorized { .. }) => exit_code::NO_PERMISSION,
            AppError::Domain(DomainError::Repository(_)) => exit_code::SOFTWARE,
            AppError::Io(_) => exit_code::IO_ERROR,
            AppError::Json(_) | AppError::Config(_) => exit_code::CONFIG,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            AppError::Domain(err @ DomainError::Repository(cause)) => {
                tracing::error!("Repository error: {}", cause);
                err.user_message(locale)
            }
            AppError::Domain(err) => err.user_message(locale),
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "An I/O error occurred".to_string()
            }

            // Configuration problems are the operator's to fix, show them as-is
            _ => self.to_string(),
        }
    }

    /// Render the JSON error body
    pub fn to_json(&self, locale: Locale) -> String {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(locale),
            },
        };

        serde_json::to_string(&body)
            .unwrap_or_else(|_| format!(r#"{{"error":{{"code":"{}"}}}}"#, self.code()))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
