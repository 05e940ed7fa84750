//! Session status and the sign-in state machine
//!
//! `SessionStatus` is what the route guard decides on. `AuthState` models
//! the life of one sign-in:
//!
//! ```text
//! Anonymous --Attempt--> Authenticating --Accepted--> Authenticated
//!     ^                        |                           |
//!     +-------Rejected---------+                           |
//!     +--------------------SignedOut / Expired-------------+
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity carried by a verified session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
}

/// Resolved status of the session attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Session has not been resolved yet
    Loading,
    Authenticated(SessionUser),
    Unauthenticated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Authenticated(_) => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Sign-in lifecycle state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticating,
    Authenticated(SessionUser),
}

/// Events that move an `AuthState`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Credentials were submitted
    Attempt,
    /// Credentials matched a stored user
    Accepted(SessionUser),
    /// Unknown user or wrong password
    Rejected,
    SignedOut,
    /// The session token passed its expiry
    Expired,
}

impl AuthState {
    /// Apply an event. Events that do not apply to the current state leave it unchanged.
    pub fn apply(self, event: AuthEvent) -> Self {
        match (self, event) {
            (Self::Anonymous, AuthEvent::Attempt) => Self::Authenticating,
            (Self::Authenticating, AuthEvent::Accepted(user)) => Self::Authenticated(user),
            (Self::Authenticating, AuthEvent::Rejected) => Self::Anonymous,
            (Self::Authenticated(_), AuthEvent::SignedOut | AuthEvent::Expired) => Self::Anonymous,
            (state, _) => state,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
