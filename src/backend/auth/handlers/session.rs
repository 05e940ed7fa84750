/**
 * Session Handlers
 *
 * `GET /api/auth/session` reports whether the caller has a valid session
 * and never fails. `GET /api/auth/me` sits behind the API guard and returns
 * the stored record for the session's user.
 */

use axum::{
    extract::State,
    http::HeaderMap,
    response::Json,
};

use crate::backend::auth::handlers::types::{SessionResponse, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::middleware::guard::resolve_session;
use crate::backend::server::state::AppState;
use crate::shared::session::SessionUser;

/// Session status handler
///
/// # Example Response
///
/// ```json
/// { "status": "authenticated", "user": { "id": "…", "username": "alice" } }
/// ```
pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionResponse> {
    let status = resolve_session(&headers, state.auth.sessions(), &state.config.auth.cookie_name);
    Json(SessionResponse::from(status))
}

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - the token names a user that no longer exists
pub async fn get_me(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<UserResponse>, BackendError> {
    let record = state.auth.current_user(user.id).await?.ok_or_else(|| {
        tracing::warn!(user_id = %user.id, "Session refers to unknown user");
        BackendError::Unauthorized
    })?;

    Ok(Json(UserResponse::from(&record)))
}
