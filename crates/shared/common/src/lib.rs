//! Common utilities shared across services.
//!
//! This crate provides:
//! - The application-boundary error type with exit codes and JSON bodies
//! - Tracing subscriber setup

pub mod error;
pub mod telemetry;

pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
