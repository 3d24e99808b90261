//! Authentication error types.

use thiserror::Error;

use crate::session::SessionError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] supplylink_core::EmailError),

    /// Unknown email at sign-in.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Empty password at sign-in.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// Sign-up with an already-registered email.
    #[error("an account with this email already exists")]
    AlreadyRegistered,

    /// Session persistence error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}
