// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Prediction endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::multipart::{Multipart, MultipartRejection};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::upload::ImageUpload;
use crate::api::errors::PredictError;
use crate::api::http_server::AppState;
use crate::classifier::{prediction::FormattedPrediction, Classifier, Prediction};
use crate::vision::{decode_image_bytes, preprocess_for_classifier};

/// POST /predict - Classify an uploaded image as cat or dog
///
/// # Request
/// Multipart form with an `image_file` part whose content type starts with `image/`.
///
/// # Response
/// - `{"cat": "<prob>", "dog": "<prob>"}` with probabilities rounded to the
///   configured precision
/// - Plain text `Invalid image file` when the upload is missing or not an image
/// - Plain text `Error processing image: <message>` when decoding or inference fails
pub async fn predict_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FormattedPrediction>, PredictError> {
    let mut multipart = multipart.map_err(|e| {
        warn!("Rejected non-multipart upload: {}", e);
        PredictError::InvalidUpload
    })?;

    let upload = ImageUpload::from_multipart(&mut multipart)
        .await
        .map_err(|e| {
            warn!("Failed to read multipart upload: {}", e);
            PredictError::InvalidUpload
        })?
        .ok_or_else(|| {
            warn!("Upload has no image_file part");
            PredictError::InvalidUpload
        })?;

    if !upload.is_image() {
        warn!("Upload declared non-image content type: {}", upload.content_type);
        return Err(PredictError::InvalidUpload);
    }

    debug!(
        "Prediction request: {} bytes, {}, file {}",
        upload.bytes.len(),
        upload.content_type,
        upload.file_name
    );

    let start = Instant::now();
    let classifier = state.classifier.clone();
    let max_bytes = state.config.max_upload_bytes;
    let prediction = tokio::task::spawn_blocking(move || {
        classify_image_bytes(classifier.as_ref(), &upload.bytes, max_bytes)
    })
    .await
    .map_err(|e| PredictError::Inference(format!("prediction task failed: {}", e)))?
    .map_err(|e| {
        warn!("Prediction failed: {}", e);
        e
    })?;

    info!(
        "Prediction complete: dog={:.4} cat={:.4}, {}ms",
        prediction.dog,
        prediction.cat,
        start.elapsed().as_millis()
    );

    Ok(Json(prediction.formatted(state.config.precision)))
}

/// Decode, preprocess and classify one image of at most `max_bytes`
pub fn classify_image_bytes(
    classifier: &dyn Classifier,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<Prediction, PredictError> {
    let (image, info) = decode_image_bytes(bytes, max_bytes)?;

    debug!(
        "Decoded image: {}x{} {:?}, {} bytes",
        info.width, info.height, info.format, info.size_bytes
    );

    let input = preprocess_for_classifier(&image);
    let probability = classifier.predict(&input).map_err(PredictError::inference)?;

    Ok(Prediction::from_dog_probability(probability))
}
