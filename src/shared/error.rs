//! Shared Error Types
//!
//! This module defines error types raised by the server-independent parts of
//! the crate, such as validating an uploaded image or decoding a detection
//! result.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Data validation failures on a named field
//! - `UploadError` - Problems with an uploaded image payload
//!
//! # Usage
//!
//! ```rust
//! use pcb_inspect::shared::error::SharedError;
//!
//! let error = SharedError::validation("image", "Please select an image file first.");
//! ```
use thiserror::Error;

/// Shared error types that can occur outside the HTTP layer
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Uploaded image could not be accepted
    #[error("Upload error: {message}")]
    UploadError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new upload error
    pub fn upload(message: impl Into<String>) -> Self {
        Self::UploadError {
            message: message.into(),
        }
    }

    /// Whether the caller can fix this error by changing its input
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::SerializationError { .. })
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
