//! Unified error handling.
//!
//! Provides a unified `AppError` type for callers that sit above the
//! individual services. Every variant maps to a user-facing message via
//! [`AppError::user_message`]; nothing here is fatal and nothing is
//! retried.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::session::SessionError;

/// Application-level error type for the marketplace.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Session persistence failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// The message a view layer should show for this error.
    ///
    /// Internal detail (I/O failures, serialization noise) is not exposed
    /// to the user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials",
                AuthError::AlreadyRegistered => "An account with this email already exists",
                AuthError::InvalidEmail(_) => "Invalid email address",
                AuthError::EmptyPassword => "Password cannot be empty",
                AuthError::Session(_) => "Could not save your session",
            },
            Self::Session(_) => "Could not save your session",
            Self::Config(_) => "Invalid configuration",
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
