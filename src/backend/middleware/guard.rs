/**
 * Route Guard Middleware
 *
 * This module protects routes that require a signed-in user. The session
 * token is taken from `Authorization: Bearer` or the session cookie,
 * verified, and turned into a `SessionStatus`. `RouteGuard` maps that status
 * to a decision:
 *
 * - `Loading` - defer (nothing is rendered yet)
 * - `Authenticated` - allow, with the `SessionUser` attached to the request
 * - `Unauthenticated` - redirect to the sign-in page, carrying the original path
 *
 * Page routes act on the redirect with `303 See Other` before the page
 * handler runs. API routes answer `401` instead.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::RETRY_AFTER, request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::auth::cookies::extract_token;
use crate::backend::auth::sessions::{SessionError, SessionIssuer};
use crate::backend::error::BackendError;
use crate::backend::pages::{self, loading_page};
use crate::backend::server::state::AppState;
use crate::shared::session::{AuthEvent, AuthState, SessionStatus, SessionUser};

/// What to do with a request for a protected route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session status not known yet; render nothing protected
    Defer,
    Allow(SessionUser),
    /// Send the viewer to this location
    Redirect(String),
}

/// Gate for one protected path
#[derive(Debug, Clone)]
pub struct RouteGuard {
    original_path: String,
}

impl RouteGuard {
    /// `original_path` is where the viewer should land after signing in
    pub fn new(original_path: impl Into<String>) -> Self {
        Self {
            original_path: original_path.into(),
        }
    }

    pub fn decide(&self, status: &SessionStatus) -> GuardDecision {
        match status {
            SessionStatus::Loading => GuardDecision::Defer,
            SessionStatus::Authenticated(user) => GuardDecision::Allow(user.clone()),
            SessionStatus::Unauthenticated => GuardDecision::Redirect(format!(
                "{}?callbackUrl={}",
                pages::SIGNIN_PATH,
                pages::encode_query_value(pages::safe_callback(Some(&self.original_path)))
            )),
        }
    }
}

/// Resolve the session carried by a request.
///
/// Never returns `Loading`: the token is either present and valid or not.
pub fn resolve_session(headers: &HeaderMap, sessions: &SessionIssuer, cookie_name: &str) -> SessionStatus {
    let Some(token) = extract_token(headers, cookie_name) else {
        return SessionStatus::Unauthenticated;
    };

    match sessions.verify(&token).and_then(|claims| claims.session_user()) {
        Ok(user) => SessionStatus::Authenticated(user),
        Err(SessionError::Expired) => {
            let state = AuthState::Anonymous.apply(AuthEvent::Expired);
            tracing::info!(?state, "Session token expired");
            SessionStatus::Unauthenticated
        }
        Err(e) => {
            tracing::warn!("Rejected session token: {}", e);
            SessionStatus::Unauthenticated
        }
    }
}

fn request_status(state: &AppState, request: &Request) -> SessionStatus {
    resolve_session(request.headers(), state.auth.sessions(), &state.config.auth.cookie_name)
}

/// Guard for HTML pages. Unauthenticated viewers are redirected.
pub async fn require_page_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let original_path = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let status = request_status(&state, &request);

    match RouteGuard::new(original_path).decide(&status) {
        GuardDecision::Allow(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        GuardDecision::Redirect(location) => {
            tracing::debug!("Redirecting unauthenticated viewer to {}", location);
            Redirect::to(&location).into_response()
        }
        GuardDecision::Defer => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(RETRY_AFTER, "1")],
            loading_page(),
        )
            .into_response(),
    }
}

/// Guard for API routes. Anything but a valid session is a 401.
pub async fn require_api_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    match request_status(&state, &request) {
        SessionStatus::Authenticated(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        _ => {
            tracing::warn!("Unauthenticated request to {}", request.uri().path());
            Err(BackendError::Unauthorized)
        }
    }
}

/// Extractor for the user attached by one of the guards
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<SessionUser>().cloned().ok_or_else(|| {
            tracing::warn!("SessionUser not found in request extensions");
            BackendError::Unauthorized
        })
    }
}
