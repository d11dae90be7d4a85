//! User service tests against the in-memory store.

use std::error::Error as _;
use std::sync::Arc;

use common::AppError;
use domain::{DomainError, RepositoryError, User, ADMIN_LOGIN};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::repository::{UserRepository, UserStore};
use user_service_lib::service::{UserManager, UserService};
use user_service_lib::{build_service, execute, run, Command};

fn setup(actor: &str, users: Vec<User>) -> (Arc<UserStore>, UserManager) {
    let store = Arc::new(UserStore::new(actor).with_users(users));
    let service = UserManager::new(store.clone());
    (store, service)
}

#[test]
fn test_register_into_empty_store() {
    let (store, service) = setup("guest", vec![]);

    let saved = service.register(User::new("bob", "s3cret!")).unwrap();

    assert_eq!(saved, User::new("bob", "s3cret!"));
    assert!(store.contains("bob").unwrap());
    assert_eq!(store.find_by_login("bob").unwrap(), Some(saved));
}

#[test]
fn test_register_all_digit_password_rejected() {
    let (store, service) = setup("guest", vec![]);

    let err = service.register(User::new("bob", "12345")).unwrap_err();

    assert_eq!(err, DomainError::WeakPassword);
    assert_eq!(err.to_string(), "Password does not meet security requirements");
    assert!(store.is_empty().unwrap());
}

#[test]
fn test_register_mixed_passwords_accepted() {
    let (store, service) = setup("guest", vec![]);

    service.register(User::new("alice", "abc123")).unwrap();
    service.register(User::new("carol", "1234a")).unwrap();

    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn test_register_empty_login_rejected() {
    let (store, service) = setup("guest", vec![]);

    let err = service.register(User::new("", "x")).unwrap_err();

    assert!(matches!(err, DomainError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Field validation error");
    assert!(store.is_empty().unwrap());
}

#[test]
fn test_register_duplicate_login_rejected() {
    let (store, service) = setup("guest", vec![User::new("bob", "original")]);

    let err = service.register(User::new("bob", "n3w-pass")).unwrap_err();

    assert_eq!(err.to_string(), "User with login 'bob' is already registered");
    assert_eq!(
        store.find_by_login("bob").unwrap().unwrap().password,
        "original"
    );
}

#[test]
fn test_delete_as_non_admin_not_authorized() {
    let (store, service) = setup("bob", vec![User::new("alice", "pw")]);

    let err = service.delete("alice").unwrap_err();

    assert_eq!(err.to_string(), "Insufficient privileges to perform this operation");
    assert!(matches!(
        err.source().and_then(|s| s.downcast_ref::<RepositoryError>()),
        Some(RepositoryError::UnsupportedOperation(_))
    ));
    assert!(store.contains("alice").unwrap());
}

#[test]
fn test_delete_as_admin() {
    let (store, service) = setup(ADMIN_LOGIN, vec![User::new("bob", "pw")]);

    service.delete("bob").unwrap();

    assert!(!store.contains("bob").unwrap());
}

#[test]
fn test_execute_register_prints_user_without_password() {
    let (_, service) = setup("guest", vec![]);

    let output = execute(
        &service,
        Command::Register {
            login: "bob".to_string(),
            password: "s3cret!".to_string(),
        },
    )
    .unwrap();

    assert_eq!(output, r#"{"login":"bob"}"#);
}

#[test]
fn test_execute_delete_maps_to_app_error() {
    let (_, service) = setup("guest", vec![User::new("bob", "pw")]);

    let err = execute(
        &service,
        Command::Delete {
            login: "bob".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Domain(DomainError::NotAuthorized { .. })));
    assert_eq!(err.code(), "NOT_AUTHORIZED");
    assert_eq!(err.exit_code(), 77);
}

#[test]
fn test_build_service_without_seed() {
    let (store, _) = build_service(&UserServiceConfig::default()).unwrap();

    assert!(store.is_empty().unwrap());
    assert_eq!(store.actor(), "guest");
}

#[test]
fn test_run_delete_as_admin() {
    let config = UserServiceConfig {
        actor: ADMIN_LOGIN.to_string(),
        ..UserServiceConfig::default()
    };

    let output = run(
        Command::Delete {
            login: "bob".to_string(),
        },
        &config,
    )
    .unwrap();

    assert_eq!(output, r#"{"deleted":"bob"}"#);
}
