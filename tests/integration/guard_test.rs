//! Route guard integration tests
//!
//! Protected pages redirect before rendering; protected APIs answer 401.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pcb_inspect::backend::auth::SessionIssuer;

use crate::common::*;

#[tokio::test]
async fn test_detection_page_redirects_without_session() {
    let app = TestApp::new();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/signin?callbackUrl=%2F")
    );

    let body = body_text(response).await;
    assert_not_contains!(body, "Upload PCB Image");
    assert_not_contains!(body, "Detection Result");
}

#[tokio::test]
async fn test_redirect_carries_query() {
    let app = TestApp::new();
    let response = app.get("/?view=latest").await;
    assert_eq!(
        location(&response).as_deref(),
        Some("/auth/signin?callbackUrl=%2F%3Fview%3Dlatest")
    );
}

#[tokio::test]
async fn test_detection_page_renders_with_session() {
    let app = TestApp::new();
    let user = create_test_user(&app, "alice").await;

    let response = app.send(get_with_cookie("/", &user.token)).await;
    let response = assert_status!(response, StatusCode::OK);
    let body = body_text(response).await;
    assert_contains!(body, "Welcome, alice");
    assert_contains!(body, "Upload PCB Image");
}

#[tokio::test]
async fn test_api_rejects_without_session() {
    let app = TestApp::new();

    let response = app.get("/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Unauthorized", "status": 401 })
    );
}

#[tokio::test]
async fn test_expired_token_is_unauthenticated() {
    let app = TestApp::new();
    let user = create_test_user(&app, "alice").await;
    let record = app
        .state
        .auth
        .users()
        .find_by_username(&user.username)
        .await
        .unwrap()
        .unwrap();

    let stale = app
        .state
        .auth
        .sessions()
        .issue_at(&record, Utc::now() - Duration::days(31))
        .unwrap();

    let response = app.send(get_with_cookie("/", &stale.token)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.send(get_with_bearer("/api/auth/me", &stale.token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.send(get_with_cookie("/api/auth/session", &stale.token)).await;
    assert_eq!(body_json(response).await["status"], "unauthenticated");
}

#[tokio::test]
async fn test_token_from_other_key_rejected() {
    let app = TestApp::new();
    let user = create_test_user(&app, "alice").await;
    let record = app
        .state
        .auth
        .users()
        .find_by_username(&user.username)
        .await
        .unwrap()
        .unwrap();

    let forger = SessionIssuer::new(b"some-other-secret-that-is-long-enough", Duration::hours(1));
    let forged = forger.issue(&record).unwrap();

    let response = app.send(get_with_cookie("/", &forged.token)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.send(get_with_bearer("/api/auth/me", &forged.token)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_routes_need_no_session() {
    let app = TestApp::new();

    assert_eq!(app.get("/auth/signin").await.status(), StatusCode::OK);
    assert_eq!(app.get("/auth/register").await.status(), StatusCode::OK);

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();
    let response = app.get("/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "Not found", "status": 404 })
    );
}
