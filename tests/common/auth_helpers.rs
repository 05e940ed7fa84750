//! Authentication test helpers
//!
//! Register users and obtain session tokens through the public endpoints.

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, COOKIE},
        Method, Request, StatusCode,
    },
    response::Response,
};

use super::app::{body_json, json_request, TestApp};

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub async fn register(app: &TestApp, username: &str, email: &str, password: &str) -> Response {
    app.send(json_request(
        Method::POST,
        "/api/auth/register",
        serde_json::json!({ "username": username, "email": email, "password": password }),
    ))
    .await
}

pub async fn sign_in(app: &TestApp, username: &str, password: &str) -> Response {
    app.send(json_request(
        Method::POST,
        "/api/auth/signin",
        serde_json::json!({ "username": username, "password": password }),
    ))
    .await
}

/// Register `username` and sign in, returning the session token
pub async fn create_test_user(app: &TestApp, username: &str) -> TestUser {
    let email = format!("{}@example.com", username);
    let password = format!("{}-password", username);

    let response = register(app, username, &email, &password).await;
    assert_eq!(response.status(), StatusCode::CREATED, "registration failed");
    let body = body_json(response).await;

    let response = sign_in(app, username, &password).await;
    assert_eq!(response.status(), StatusCode::OK, "sign-in failed");
    let token = body_json(response).await["token"]
        .as_str()
        .expect("token in sign-in body")
        .to_string();

    TestUser {
        id: body["user"]["id"].as_str().unwrap_or_default().to_string(),
        username: username.to_string(),
        email,
        password,
        token,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// `Cookie` header value carrying the session token
pub fn session_cookie_header(token: &str) -> String {
    format!("pcb_session={}", token)
}

/// GET with the session cookie attached
pub fn get_with_cookie(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(COOKIE, session_cookie_header(token))
        .body(Body::empty())
        .unwrap()
}

/// GET with a bearer token attached
pub fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::get(uri)
        .header(AUTHORIZATION, auth_header(token))
        .body(Body::empty())
        .unwrap()
}
