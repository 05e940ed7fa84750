//! Authentication error taxonomy
//!
//! Every auth use case returns `Result<_, AuthError>`. Lower layers convert
//! into it with `From`, so handlers only ever match on these four variants.

use thiserror::Error;

use crate::backend::auth::credentials::CredentialError;
use crate::backend::auth::sessions::SessionError;
use crate::backend::auth::users::{ConflictField, RepositoryError};

/// Message shared by every sign-in failure
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Message for incomplete registration input
pub const MISSING_FIELDS: &str = "Missing username, email, or password";

/// Message for a password bcrypt cannot hash without truncating it
pub const PASSWORD_TOO_LONG: &str = "Password is too long";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// Username or email already registered
    #[error("{}", .0.message())]
    Conflict(ConflictField),

    /// Unknown user or wrong password
    #[error("{}", INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// Anything the caller cannot fix. The detail is for logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Message safe to show to the client
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(field) => Self::Conflict(field),
            RepositoryError::Unavailable(detail) => Self::Internal(detail),
        }
    }
}

impl From<CredentialError> for AuthError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::TooLong => Self::Validation(PASSWORD_TOO_LONG.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Encoding(e) => Self::Internal(format!("token signing failed: {}", e)),
            SessionError::Expired | SessionError::Invalid(_) => Self::InvalidCredentials,
        }
    }
}
