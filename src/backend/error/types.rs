/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers. It wraps
 * the auth taxonomy and the shared validation errors and knows which
 * status code and client-facing message each one maps to.
 *
 * # Status Code Mapping
 *
 * - `AuthError::Validation` - 400 Bad Request
 * - `AuthError::Conflict` - 409 Conflict
 * - `AuthError::InvalidCredentials` - 401 Unauthorized
 * - `AuthError::Internal` - 500 Internal Server Error
 * - `Unauthorized` - 401 Unauthorized
 * - `SharedError` - 400 for client errors, 500 otherwise
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::errors::AuthError;
use crate::shared::SharedError;

/// Message returned for every 500
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use pcb_inspect::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "No image field in upload");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. malformed request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// No valid session on a protected API route
    #[error("Unauthorized")]
    Unauthorized,

    /// Failure from an auth use case
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Shared error (from shared module)
    ///
    /// Raised by shared types such as `ImageUpload` when their input is
    /// rejected.
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Shorthand for a 400 handler error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Auth(err) => match err {
                AuthError::Validation(_) => StatusCode::BAD_REQUEST,
                AuthError::Conflict(_) => StatusCode::CONFLICT,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::SharedError(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client.
    ///
    /// Every 500 collapses to `INTERNAL_MESSAGE`; the detail stays in the
    /// `Display` output for logging.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_MESSAGE.to_string();
        }
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::Auth(err) => err.public_message(),
            Self::SharedError(SharedError::UploadError { message })
            | Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}
