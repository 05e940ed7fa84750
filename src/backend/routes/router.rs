/**
 * Router Configuration
 *
 * Combines the page and API routes, static files, the health check and the
 * JSON 404 fallback into one router, wrapped in `TraceLayer`.
 */

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::error::ErrorBody;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(StatusCode::NOT_FOUND, "Not found")),
    )
}

/// Create the Axum router with all routes configured
///
/// 1. **Pages**: `/`, `/auth/signin`, `/auth/register`
/// 2. **API Routes**: `/api/auth/*`, `/api/detect`
/// 3. **Health**: `GET /health`
/// 4. **Static Files**: `/static` from the configured directory
/// 5. **Fallback**: JSON 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_page_routes(router, &app_state);
    let router = configure_api_routes(router, &app_state);

    let router = router.nest_service("/static", ServeDir::new(&app_state.config.server.static_dir));

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
