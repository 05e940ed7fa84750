/**
 * Sign-out Handler
 *
 * Clears the session cookie. Tokens are stateless, so a token copied
 * elsewhere stays valid until it expires.
 */

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{ACCEPT, CONTENT_TYPE, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Json, Redirect, Response},
};

use crate::backend::auth::cookies::clear_cookie;
use crate::backend::auth::handlers::types::{OkResponse, SignOutRequest};
use crate::backend::middleware::guard::resolve_session;
use crate::backend::pages;
use crate::backend::server::state::AppState;
use crate::shared::session::{AuthEvent, AuthState};

fn header_contains(headers: &HeaderMap, name: axum::http::HeaderName, needle: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains(needle))
}

/// Whether the caller wants a redirect rather than JSON.
///
/// A JSON body decides with its `redirect` field (default false). Otherwise
/// the caller gets a redirect unless it asks for JSON via `Accept`.
fn wants_redirect(headers: &HeaderMap, body: &[u8]) -> bool {
    if header_contains(headers, CONTENT_TYPE, "application/json") {
        return serde_json::from_slice::<SignOutRequest>(body)
            .ok()
            .and_then(|request| request.redirect)
            .unwrap_or(false);
    }
    !header_contains(headers, ACCEPT, "application/json")
}

/// Sign-out handler
pub async fn sign_out(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let status = resolve_session(&headers, state.auth.sessions(), &state.config.auth.cookie_name);
    if let Some(user) = status.user() {
        let auth_state = AuthState::Authenticated(user.clone()).apply(AuthEvent::SignedOut);
        tracing::info!(user_id = %user.id, state = ?auth_state, "User signed out: {}", user.username);
    }

    let cookie = clear_cookie(&state.config.auth);

    if wants_redirect(&headers, &body) {
        ([(SET_COOKIE, cookie)], Redirect::to(pages::SIGNIN_PATH)).into_response()
    } else {
        (StatusCode::OK, [(SET_COOKIE, cookie)], Json(OkResponse { ok: true })).into_response()
    }
}
