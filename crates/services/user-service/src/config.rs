//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::{AppError, AppResult};
use domain::Locale;

/// Caller assumed when none is configured
pub const DEFAULT_ACTOR: &str = "guest";

/// User service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Login of the caller the repository acts for
    pub actor: String,
    /// Language of user-facing messages
    pub locale: Locale,
    /// Optional JSON file with users to pre-load
    pub seed_file: Option<PathBuf>,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `USER_SERVICE_ACTOR`, `USER_SERVICE_LOCALE` and
    /// `USER_SERVICE_SEED_FILE`, after loading `.env` if present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let locale = match lookup("USER_SERVICE_LOCALE") {
            Some(raw) => raw
                .parse::<Locale>()
                .map_err(|e| AppError::config(e.to_string()))?,
            None => Locale::default(),
        };

        Ok(Self {
            actor: lookup("USER_SERVICE_ACTOR")
                .filter(|actor| !actor.is_empty())
                .unwrap_or_else(|| DEFAULT_ACTOR.to_string()),
            locale,
            seed_file: lookup("USER_SERVICE_SEED_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}

impl UserServiceConfig {
    /// Override values with those given explicitly, e.g. on the command line.
    pub fn with_overrides(
        mut self,
        actor: Option<String>,
        locale: Option<Locale>,
        seed_file: Option<PathBuf>,
    ) -> Self {
        if let Some(actor) = actor {
            self.actor = actor;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if seed_file.is_some() {
            self.seed_file = seed_file;
        }
        self
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            actor: DEFAULT_ACTOR.to_string(),
            locale: Locale::default(),
            seed_file: None,
        }
    }
}
