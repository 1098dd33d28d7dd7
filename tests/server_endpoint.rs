//! Integration tests for the HTTP boundary.
//!
//! Requests go through the router in-process (no socket) while the resolver
//! talks to wiremock upstreams.

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use helpers::*;
use image_lookup::server::{router, ErrorBody, SEARCH_FAILED_MESSAGE};
use image_lookup::ImageLookup;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app(server: &MockServer) -> Router {
    router(Arc::new(resolver(mock_config(server))))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let server = MockServer::start().await;
    let (status, body) = get(app(&server), "/api/search-images").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).expect("JSON error body");
    assert_eq!(error.error, "Query parameter is required");
}

#[tokio::test]
async fn test_blank_query_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MURL_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/search-images?q=+++").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = serde_json::from_slice(&body).expect("JSON error body");
    assert_eq!(error.error, "Query parameter is required");
}

#[tokio::test]
async fn test_successful_search_returns_image_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(MURL_PAGE))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/search-images?q=red%20panda").await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).expect("JSON body");
    assert_eq!(value["imageUrl"], "http://example.com/a.jpg");
}

#[tokio::test]
async fn test_no_image_found_returns_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/search-images?q=nothing").await;

    assert_eq!(status, StatusCode::OK);
    let lookup: ImageLookup = serde_json::from_slice(&body).expect("JSON body");
    assert_eq!(lookup, ImageLookup { image_url: None });
    let value: serde_json::Value = serde_json::from_slice(&body).expect("JSON body");
    assert!(value["imageUrl"].is_null());
}

#[tokio::test]
async fn test_exhausted_upstreams_return_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream secret detail"))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/search-images?q=cats").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorBody = serde_json::from_slice(&body).expect("JSON error body");
    assert_eq!(error.error, SEARCH_FAILED_MESSAGE);
    assert_eq!(error.error, "Failed to search images");
    // Upstream detail never leaks into the response
    assert!(!String::from_utf8_lossy(&body).contains("secret"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = MockServer::start().await;
    let (status, body) = get(app(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = MockServer::start().await;
    let (status, _) = get(app(&server), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
