// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! These tests verify that:
//! - `/`, `/predict`, `/env` and `/health` are registered with the right methods
//! - `/env` echoes the configured CORS_ORIGIN
//! - The CORS layer follows the configured origin list

use super::common::*;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use catdog_classifier_node::{
    api::{EnvResponse, HealthResponse},
    config::{CorsConfig, ServerConfig},
};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn config_with_origins(raw: &str) -> ServerConfig {
    ServerConfig {
        cors: CorsConfig::parse(raw).unwrap(),
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_home_returns_helloworld() {
    let response = send(app_with(FixedClassifier(0.5)), get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "helloworld");
}

#[tokio::test]
async fn test_home_ignores_query_parameters() {
    let response = send(app_with(FixedClassifier(0.5)), get("/?name=rex&kind=dog")).await;
    assert_eq!(body_text(response).await, "helloworld");
}

#[tokio::test]
async fn test_predict_rejects_get() {
    let response = send(app_with(FixedClassifier(0.5)), get("/predict")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let response = send(app_with(FixedClassifier(0.5)), get("/v1/predict")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_env_returns_configured_origin() {
    let app = app_with_config(FixedClassifier(0.5), config_with_origins("a.com, b.com"));
    let response = send(app, get("/env")).await;

    let body: EnvResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body.cors_origin.as_deref(), Some("a.com, b.com"));
}

#[tokio::test]
async fn test_env_returns_null_without_origin() {
    let response = send(app_with(FixedClassifier(0.5)), get("/env")).await;
    assert_eq!(body_text(response).await, r#"{"CORS_ORIGIN":null}"#);
}

#[tokio::test]
async fn test_health_reports_model_and_version() {
    let response = send(app_with(FixedClassifier(0.5)), get("/health")).await;
    let body: HealthResponse = serde_json::from_str(&body_text(response).await).unwrap();

    assert_eq!(body.status, "ok");
    assert!(body.model.ends_with("cat_dog_classifier.onnx"));
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_allows_listed_origin() {
    let app = app_with_config(
        FixedClassifier(0.5),
        config_with_origins("http://a.com, http://b.com"),
    );
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "http://b.com")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://b.com"
    );
}

#[tokio::test]
async fn test_cors_omits_header_for_unlisted_origin() {
    let app = app_with_config(FixedClassifier(0.5), config_with_origins("http://a.com"));
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_wildcard_by_default() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header(header::ORIGIN, "http://anywhere.example")
        .body(Body::empty())
        .unwrap();

    let response = send(app_with(FixedClassifier(0.5)), request).await;
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_for_predict() {
    let app = app_with_config(FixedClassifier(0.5), config_with_origins("http://a.com"));
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/predict")
        .header(header::ORIGIN, "http://a.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://a.com"
    );
}
