/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/signin` - Sign in (JSON or redirect mode)
 * - `POST /api/auth/signout` - Clear the session cookie
 * - `GET /api/auth/session` - Session status
 * - `GET /api/auth/me` - Current user (requires authentication)
 *
 * ## Detection
 * - `POST /api/detect` - Mock defect detection (requires authentication)
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, get_session, register, sign_in, sign_out};
use crate::backend::detection::detect;
use crate::backend::middleware::require_api_session;
use crate::backend::server::state::AppState;

/// Add the `/api` routes. Protected routes get the API guard.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let upload_limit = app_state.config.detection.max_upload_bytes;

    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route(
            "/api/detect",
            post(detect).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route_layer(from_fn_with_state(app_state.clone(), require_api_session));

    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/signout", post(sign_out))
        .route("/api/auth/session", get(get_session))
        .merge(protected)
}
