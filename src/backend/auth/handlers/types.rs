//! Authentication handler types
//!
//! Request and response bodies for the `/api/auth/*` endpoints and the
//! HTML forms that post to `/auth/*`.
//!
//! Request fields are optional so that a body missing a field still
//! deserializes and the handler can answer with its own 400 message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::shared::session::{SessionStatus, SessionUser};

/// Registration request (JSON)
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Registration form (HTML)
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Sign-in request, used for both the JSON endpoint and the HTML form
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignInRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Answer with a redirect instead of JSON
    #[serde(default)]
    pub redirect: bool,
    /// Where to go after a successful redirect-mode sign-in
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Sign-out request (JSON)
#[derive(Deserialize, Debug, Default)]
pub struct SignOutRequest {
    #[serde(default)]
    pub redirect: Option<bool>,
}

/// User identity returned to clients. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// `{ "message": ... }` body used by registration
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

/// 201 body for a new registration
#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// 200 body for a JSON-mode sign-in
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub ok: bool,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

#[derive(Serialize, Debug)]
pub struct OkResponse {
    pub ok: bool,
}

/// `GET /api/auth/session` body
#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

impl From<SessionStatus> for SessionResponse {
    fn from(status: SessionStatus) -> Self {
        Self {
            status: status.as_str(),
            user: status.user().cloned(),
        }
    }
}
