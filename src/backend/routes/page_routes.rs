/**
 * Page Routes
 *
 * # Routes
 *
 * - `GET /` - Detection page (requires authentication, redirects otherwise)
 * - `GET /auth/signin`, `POST /auth/signin` - Sign-in page and form
 * - `GET /auth/register`, `POST /auth/register` - Registration page and form
 */

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::backend::auth::handlers::{register_form, sign_in_form};
use crate::backend::middleware::require_page_session;
use crate::backend::pages::{
    home::home_page, register::register_page, signin::signin_page, REGISTER_PATH, SIGNIN_PATH,
};
use crate::backend::server::state::AppState;

pub fn configure_page_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", get(home_page))
        .route_layer(from_fn_with_state(app_state.clone(), require_page_session));

    router
        .route(SIGNIN_PATH, get(signin_page).post(sign_in_form))
        .route(REGISTER_PATH, get(register_page).post(register_form))
        .merge(protected)
}
