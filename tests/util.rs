//! Helpers for building requests and reading JSON responses in integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use holocron::server::{model::app::AppState, router};
use holocron_test_utils::TestContext;
use serde_json::Value;

/// Extension methods on the test context for the main holocron crate
pub trait TestContextExt {
    /// The full application router backed by the test database
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn app(&self) -> Router {
        router::routes().with_state(self.to_app_state::<AppState>())
    }
}

/// Builds a request with a JSON body
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a request without a body
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads the response body as JSON
pub async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
