//! Shared Module
//!
//! This module contains types that are independent of the HTTP server:
//! configuration, shared error types, the detection result contract consumed
//! by the detection page, and the session status model used by the route
//! guard.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Detection result contract
pub mod detection;

/// Session status and sign-in state machine
pub mod session;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, AuthConfig, ConfigError, DetectionConfig, ServerConfig};
pub use detection::{BoundingBox, Defect, DetectionResult, ImageUpload};
pub use error::SharedError;
pub use session::{AuthEvent, AuthState, SessionStatus, SessionUser};
