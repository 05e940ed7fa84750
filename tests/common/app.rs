//! Test application construction and HTTP helpers

use axum::{
    body::{to_bytes, Body},
    http::{
        header::{CONTENT_TYPE, LOCATION, SET_COOKIE},
        Method, Request,
    },
    response::Response,
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use pcb_inspect::backend::auth::{AuthService, InMemoryUserRepository, UserRepository};
use pcb_inspect::backend::detection::MockDetector;
use pcb_inspect::backend::pages::encode_query_value;
use pcb_inspect::backend::server::{build_state, create_app_with_state, AppState};
use pcb_inspect::shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Fast config: cheapest bcrypt cost, no detection delay, fixed secret
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .detection_delay_ms(0)
        .build()
        .expect("test config is valid")
}

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::with_state(build_state(config))
    }

    /// App backed by a caller-supplied user repository
    pub fn with_repository(users: Arc<dyn UserRepository>) -> Self {
        let config = test_config();
        let auth = AuthService::from_config(&config.auth, users);
        let detector = Arc::new(MockDetector::from_config(&config.detection));
        Self::with_state(AppState::new(auth, detector, config))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: create_app_with_state(state.clone()),
            state,
        }
    }

    pub fn with_fresh_store() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()))
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode_query_value(k), encode_query_value(v)))
        .collect::<Vec<_>>()
        .join("&");
    Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!("Body is not JSON ({}): {}", e, String::from_utf8_lossy(&bytes))
    })
}

pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
