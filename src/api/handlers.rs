// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::http_server::AppState;
use crate::version::VERSION_NUMBER;

/// Body returned by `GET /`
pub const HOME_BODY: &str = "helloworld";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvResponse {
    #[serde(rename = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub version: String,
}

/// GET / - liveness text used by clients to wake the service
pub async fn home_handler() -> &'static str {
    HOME_BODY
}

/// GET /env - echo the configured CORS origins
pub async fn env_handler(State(state): State<AppState>) -> Json<EnvResponse> {
    Json(EnvResponse {
        cors_origin: state.config.cors.raw.clone(),
    })
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.model_path.display().to_string(),
        version: VERSION_NUMBER.to_string(),
    })
}
