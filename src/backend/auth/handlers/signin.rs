/**
 * Sign-in Handlers
 *
 * `POST /api/auth/signin` answers with JSON by default and with a redirect
 * when the body sets `"redirect": true`. `POST /auth/signin` is the HTML
 * form and always redirects.
 *
 * On success the session token is set as an `HttpOnly` cookie in both
 * modes; JSON callers also get it in the body.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::handlers::types::{SignInRequest, SignInResponse, UserResponse};
use crate::backend::error::BackendError;
use crate::backend::pages::{self, safe_callback};
use crate::backend::server::state::AppState;

/// Sign-in handler (JSON)
///
/// # Errors
///
/// * `400 Bad Request` - missing username or password
/// * `401 Unauthorized` - `{ "error": "Invalid credentials", "status": 401 }`
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(request)) => complete_sign_in(&state, request).await,
        Err(rejection) => {
            tracing::warn!("Unreadable sign-in body: {}", rejection.body_text());
            BackendError::bad_request("Missing username or password").into_response()
        }
    }
}

/// Sign-in form handler
pub async fn sign_in_form(State(state): State<AppState>, Form(mut form): Form<SignInRequest>) -> Response {
    form.redirect = true;
    complete_sign_in(&state, form).await
}

/// Run the sign-in and shape the response for the requested mode
pub async fn complete_sign_in(state: &AppState, request: SignInRequest) -> Response {
    let result = state
        .auth
        .sign_in(
            request.username.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    let auth_config = &state.config.auth;

    match (result, request.redirect) {
        (Ok(signed_in), false) => {
            let cookie = session_cookie(auth_config, &signed_in.token.token, state.auth.sessions().ttl());
            (
                StatusCode::OK,
                [(SET_COOKIE, cookie)],
                Json(SignInResponse {
                    ok: true,
                    token: signed_in.token.token,
                    expires_at: signed_in.token.expires_at,
                    user: UserResponse::from(&signed_in.user),
                }),
            )
                .into_response()
        }
        (Ok(signed_in), true) => {
            let cookie = session_cookie(auth_config, &signed_in.token.token, state.auth.sessions().ttl());
            let target = safe_callback(request.callback_url.as_deref());
            ([(SET_COOKIE, cookie)], Redirect::to(target)).into_response()
        }
        (Err(err), false) => BackendError::from(err).into_response(),
        (Err(err), true) => {
            let err = BackendError::from(err);
            if err.status_code().is_server_error() {
                tracing::error!("Sign-in error: {}", err);
            }
            let mut location = format!(
                "{}?error={}",
                pages::SIGNIN_PATH,
                pages::encode_query_value(&err.message())
            );
            let target = safe_callback(request.callback_url.as_deref());
            if target != "/" {
                location.push_str("&callbackUrl=");
                location.push_str(&pages::encode_query_value(target));
            }
            Redirect::to(&location).into_response()
        }
    }
}
