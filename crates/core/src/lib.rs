//! Shared primitives for all Rust crates in LicitaSis.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{CustomLevel, PermissionLevel, UserIdentity};

/// Result type used across LicitaSis crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// No identity is attached to the request.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Supplied sign-in credentials were wrong.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Request refused before any identity check, e.g. a cross-site mutation.
    #[error("request rejected: {0}")]
    RequestRejected(String),

    /// Identity is present but lacks the required capability.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Infrastructure failure, including an unreachable grant store.
    #[error("internal error: {0}")]
    Internal(String),
}
