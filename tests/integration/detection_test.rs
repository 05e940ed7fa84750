//! Detection API integration tests

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, COOKIE},
        Request, StatusCode,
    },
};

use crate::common::*;

const BOUNDARY: &str = "pcb-inspect-test-boundary";

/// Build a multipart body with one file field
fn multipart_request(token: Option<&str>, field: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"board.png\"\r\n",
            field
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let mut builder = Request::post("/api/detect").header(
        CONTENT_TYPE,
        format!("multipart/form-data; boundary={}", BOUNDARY),
    );
    if let Some(token) = token {
        builder = builder.header(COOKIE, session_cookie_header(token));
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn test_detect_requires_session() {
    let app = TestApp::new();
    let response = app
        .send(multipart_request(None, "image", "image/png", b"\x89PNG"))
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_detect_returns_mock_result() {
    let app = TestApp::new();
    let user = create_test_user(&app, "alice").await;

    let response = app
        .send(multipart_request(Some(&user.token), "image", "image/png", b"\x89PNG"))
        .await;
    let response = assert_status!(response, StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["originalImage"], "data:image/png;base64,iVBORw==");
    assert_eq!(body["detectedImage"], "/static/images/mock_pcb_detected.jpg");

    let defects = body["defects"].as_array().unwrap();
    assert_eq!(defects.len(), 2);
    assert_eq!(defects[0]["type"], "Missing Component");
    assert_eq!(
        defects[0]["location"],
        serde_json::json!({ "x": 100, "y": 150, "width": 30, "height": 20 })
    );
    assert_eq!(defects[1]["type"], "Short Circuit");
    assert_eq!(
        defects[1]["location"],
        serde_json::json!({ "x": 250, "y": 300, "width": 50, "height": 10 })
    );
    for defect in defects {
        assert_in_range!(defect["confidence"].as_f64().unwrap(), 0.70, 0.99);
    }
    assert_in_range!(body["processingTime"].as_f64().unwrap(), 0.5, 2.5);
}

#[tokio::test]
async fn test_detect_rejects_non_image() {
    let app = TestApp::new();
    let user = create_test_user(&app, "alice").await;

    let response = app
        .send(multipart_request(Some(&user.token), "image", "text/plain", b"hello"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Expected an image file, got text/plain");
}

#[tokio::test]
async fn test_detect_requires_image_field() {
    let app = TestApp::new();
    let user = create_test_user(&app, "alice").await;

    let response = app
        .send(multipart_request(Some(&user.token), "document", "image/png", b"\x89PNG"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Please select an image file first.");
}

#[tokio::test]
async fn test_detect_rejects_oversized_upload() {
    let config = pcb_inspect::shared::AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .detection_delay_ms(0)
        .max_upload_bytes(1024)
        .build()
        .unwrap();
    let app = TestApp::with_config(config);
    let user = create_test_user(&app, "alice").await;

    let response = app
        .send(multipart_request(Some(&user.token), "image", "image/png", &vec![0u8; 4096]))
        .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
