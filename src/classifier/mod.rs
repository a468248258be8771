// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cat/dog classifier
//!
//! Components:
//! - `onnx_model` - ONNX Runtime wrapper, loaded once at startup
//! - `prediction` - Complementary cat/dog probabilities and their formatting

pub mod onnx_model;
pub mod prediction;

use anyhow::Result;
use ndarray::Array4;

pub use onnx_model::OnnxClassifier;
pub use prediction::{format_probability, Prediction};

/// Default location of the exported classifier weights
pub const DEFAULT_MODEL_PATH: &str = "model/cat_dog_classifier.onnx";

/// A binary image classifier shared read-only across requests.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    /// Run one forward pass over a preprocessed `[1, 224, 224, 3]` batch.
    ///
    /// Returns the raw network output, interpreted as P(dog).
    fn predict(&self, input: &Array4<f32>) -> Result<f32>;
}
