//! User Service Library
//!
//! This crate provides user registration and deletion on top of a
//! pluggable user repository. It ships an in-memory repository and a
//! command-line front end.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use common::AppResult;
use domain::User;

use crate::config::UserServiceConfig;
use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Operation requested by the caller.
#[derive(Debug, Clone)]
pub enum Command {
    Register { login: String, password: String },
    Delete { login: String },
}

/// Build the in-memory store and service for the given configuration.
pub fn build_service(config: &UserServiceConfig) -> AppResult<(Arc<UserStore>, UserManager)> {
    let users = match &config.seed_file {
        Some(path) => infra::load_seed(path)?,
        None => Vec::new(),
    };

    let store = Arc::new(UserStore::new(config.actor.clone()).with_users(users));
    info!("User store ready for caller '{}'", store.actor());

    let service = UserManager::new(store.clone());
    Ok((store, service))
}

/// Execute a command and return its JSON output.
pub fn run(command: Command, config: &UserServiceConfig) -> AppResult<String> {
    let (_, service) = build_service(config)?;
    execute(&service, command)
}

/// Execute a command against an existing service.
pub fn execute(service: &dyn UserService, command: Command) -> AppResult<String> {
    let output = match command {
        Command::Register { login, password } => {
            let user = service.register(User::new(login, password))?;
            serde_json::to_string(&user)?
        }
        Command::Delete { login } => {
            service.delete(&login)?;
            json!({ "deleted": login }).to_string()
        }
    };

    Ok(output)
}
