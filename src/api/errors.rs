// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::vision::ImageError;

/// Failure of a `/predict` request.
///
/// Every variant is reported as a plain-text body with status 200, which is
/// what existing clients expect.
#[derive(Debug, Error)]
pub enum PredictError {
    /// No `image_file` field, unreadable form, or a non-image content type
    #[error("Invalid image file")]
    InvalidUpload,

    #[error("Error processing image: {0}")]
    Decode(#[from] ImageError),

    #[error("Error processing image: {0}")]
    Inference(String),
}

impl PredictError {
    pub fn inference(err: anyhow::Error) -> Self {
        PredictError::Inference(format!("{:#}", err))
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.to_string()).into_response()
    }
}
