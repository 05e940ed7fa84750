/**
 * Registration Handlers
 *
 * `POST /api/auth/register` takes JSON and answers with JSON.
 * `POST /auth/register` takes the HTML form and answers with a redirect to
 * the sign-in page, or the form again with the error shown.
 *
 * Both delegate to `AuthService::register`; the only extra rule on the form
 * path is that both password fields must match.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    Form,
};

use crate::backend::auth::errors::{AuthError, MISSING_FIELDS};
use crate::backend::auth::handlers::types::{
    MessageBody, RegisterForm, RegisterRequest, RegisterResponse, UserResponse,
};
use crate::backend::error::BackendError;
use crate::backend::pages::{self, register::render_register_page};
use crate::backend::server::state::AppState;

/// Message shown on the sign-in page after registering
pub const REGISTERED_MESSAGE: &str = "Registration successful! Please sign in.";

fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Translate a registration failure into `{ "message": ... }`
fn failure_response(err: AuthError) -> Response {
    let err = BackendError::from(err);
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!("Registration error: {}", err);
    }
    message_response(status, err.message())
}

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field or unreadable body
/// * `409 Conflict` - username or email already exists
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "alice", "email": "alice@x.com", "password": "p@ss1" }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "User created successfully",
///   "user": { "id": "…", "username": "alice", "email": "alice@x.com" }
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Unreadable registration body: {}", rejection.body_text());
            return message_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
    };

    let result = state
        .auth
        .register(
            request.username.as_deref().unwrap_or_default(),
            request.email.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await;

    match result {
        Ok(user) => (
            StatusCode::CREATED,
            Json(RegisterResponse {
                message: "User created successfully".to_string(),
                user: UserResponse::from(&user),
            }),
        )
            .into_response(),
        Err(err) => failure_response(err),
    }
}

/// Registration form handler
pub async fn register_form(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    if form.password != form.confirm_password {
        return (
            StatusCode::BAD_REQUEST,
            render_register_page(Some("Passwords do not match."), &form.username, &form.email),
        )
            .into_response();
    }

    match state.auth.register(&form.username, &form.email, &form.password).await {
        Ok(_) => Redirect::to(&format!(
            "{}?message={}",
            pages::SIGNIN_PATH,
            pages::encode_query_value(REGISTERED_MESSAGE)
        ))
        .into_response(),
        Err(err) => {
            let err = BackendError::from(err);
            let status = err.status_code();
            if status.is_server_error() {
                tracing::error!("Registration error: {}", err);
            }
            (
                status,
                render_register_page(Some(&err.message()), &form.username, &form.email),
            )
                .into_response()
        }
    }
}
