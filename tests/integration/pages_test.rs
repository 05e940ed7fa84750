//! Server-rendered page tests

use axum::http::{header::CONTENT_TYPE, StatusCode};

use crate::common::*;

#[tokio::test]
async fn test_signin_page_shows_registration_message() {
    let app = TestApp::new();
    let response = app
        .get("/auth/signin?message=Registration%20successful!%20Please%20sign%20in.")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_contains!(
        response.headers()[CONTENT_TYPE].to_str().unwrap(),
        "text/html"
    );
    assert_contains!(body_text(response).await, "Registration successful! Please sign in.");
}

#[tokio::test]
async fn test_signin_page_escapes_error() {
    let app = TestApp::new();
    let response = app
        .get("/auth/signin?error=%3Cscript%3Ealert(1)%3C%2Fscript%3E")
        .await;

    let body = body_text(response).await;
    assert_not_contains!(body, "<script>alert(1)</script>");
    assert_contains!(body, "&lt;script&gt;");
}

#[tokio::test]
async fn test_signin_page_keeps_callback() {
    let app = TestApp::new();
    let response = app.get("/auth/signin?callbackUrl=%2F%3Fview%3Dlatest").await;
    assert_contains!(
        body_text(response).await,
        "name=\"callbackUrl\" value=\"/?view=latest\""
    );
}

#[tokio::test]
async fn test_register_page_has_confirm_field() {
    let app = TestApp::new();
    let body = body_text(app.get("/auth/register").await).await;
    assert_contains!(body, "name=\"confirm_password\"");
    assert_contains!(body, "action=\"/auth/register\"");
}
