// Integration tests for the relay endpoint HTTP contract.
//
// The router is exercised in-process with a mocked upstream backend; no
// network calls are made.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use voice_relay::{
    create_router, AppState, TranscriptionBackend, MISSING_FIELDS_ERROR, MISSING_KEY_ERROR,
};

struct CannedUpstream(Value);

#[async_trait]
impl TranscriptionBackend for CannedUpstream {
    async fn generate(&self, _audio: &str, _mime_type: &str) -> anyhow::Result<Value> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

struct FailingUpstream;

#[async_trait]
impl TranscriptionBackend for FailingUpstream {
    async fn generate(&self, _audio: &str, _mime_type: &str) -> anyhow::Result<Value> {
        anyhow::bail!("connection reset by upstream")
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn router_with(upstream: Option<Arc<dyn TranscriptionBackend>>) -> Router {
    create_router(AppState::new(upstream))
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_request_relays_upstream_body_verbatim() {
    let upstream_body = json!({
        "candidates": [{"content": {"parts": [{"text": "hello"}]}}],
        "modelVersion": "test"
    });
    let router = router_with(Some(Arc::new(CannedUpstream(upstream_body.clone()))));

    let response = router
        .oneshot(post_json(json!({"audio": "AAAA", "mimeType": "audio/webm"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("relay responses carry the CORS header"),
        "*"
    );
    assert_eq!(body_json(response).await, upstream_body);
}

#[tokio::test]
async fn upstream_error_payload_is_still_relayed_as_200() {
    // The relay does not interpret the upstream body.
    let upstream_body = json!({"error": {"message": "quota exceeded", "code": 429}});
    let router = router_with(Some(Arc::new(CannedUpstream(upstream_body.clone()))));

    let response = router
        .oneshot(post_json(json!({"audio": "AAAA", "mimeType": "audio/webm"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, upstream_body);
}

#[tokio::test]
async fn missing_audio_is_400_with_fixed_message() {
    let router = router_with(Some(Arc::new(CannedUpstream(json!({})))));

    let response = router
        .oneshot(post_json(json!({"mimeType": "audio/webm"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": MISSING_FIELDS_ERROR}));
}

#[tokio::test]
async fn missing_mime_type_is_400_with_fixed_message() {
    let router = router_with(Some(Arc::new(CannedUpstream(json!({})))));

    let response = router
        .oneshot(post_json(json!({"audio": "AAAA"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": MISSING_FIELDS_ERROR}));
}

#[tokio::test]
async fn empty_fields_count_as_missing() {
    let router = router_with(Some(Arc::new(CannedUpstream(json!({})))));

    let response = router
        .oneshot(post_json(json!({"audio": "", "mimeType": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": MISSING_FIELDS_ERROR}));
}

#[tokio::test]
async fn malformed_json_body_is_400_with_error_body() {
    let router = router_with(Some(Arc::new(CannedUpstream(json!({})))));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("this is not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string(), "400 must carry a JSON error body");
}

#[tokio::test]
async fn missing_credential_is_500_with_fixed_message() {
    let router = router_with(None);

    let response = router
        .oneshot(post_json(json!({"audio": "AAAA", "mimeType": "audio/webm"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({"error": MISSING_KEY_ERROR}));
}

#[tokio::test]
async fn request_shape_is_checked_before_the_credential() {
    let router = router_with(None);

    let response = router
        .oneshot(post_json(json!({"audio": "AAAA"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"error": MISSING_FIELDS_ERROR}));
}

#[tokio::test]
async fn upstream_failure_is_500_with_error_body() {
    let router = router_with(Some(Arc::new(FailingUpstream)));

    let response = router
        .oneshot(post_json(json!({"audio": "AAAA", "mimeType": "audio/webm"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("connection reset by upstream"));
}

#[tokio::test]
async fn preflight_answers_with_cors_headers_and_no_processing() {
    // No credential configured: preflight must succeed anyway, proving no
    // credential check or body parse happens on OPTIONS.
    let router = router_with(None);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");

    let methods = headers
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST") && methods.contains("OPTIONS"));

    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
}

#[tokio::test]
async fn other_methods_are_405() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let router = router_with(Some(Arc::new(CannedUpstream(json!({})))));

        let request = Request::builder()
            .method(method.clone())
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{} should be rejected",
            method
        );
    }
}

#[tokio::test]
async fn health_check_works() {
    let router = router_with(None);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
