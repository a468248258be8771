// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX cat/dog classifier
//!
//! Wraps an ONNX Runtime session for the MobileNet-based binary classifier.
//! The network takes a `[1, 224, 224, 3]` f32 tensor (MobileNet scaling) and
//! emits a single sigmoid output, P(dog).
//!
//! The session is built once at startup and shared by every request.

use anyhow::{anyhow, Context, Result};
use ndarray::Array4;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::Classifier;
use crate::vision::preprocessing::{CLASSIFIER_CHANNELS, CLASSIFIER_INPUT_SIZE};

/// Cat/dog classifier backed by ONNX Runtime
///
/// Runs on CPU only. `Session::run` needs exclusive access, so the session
/// sits behind a mutex; cloning shares the same session.
#[derive(Clone)]
pub struct OnnxClassifier {
    /// ONNX Runtime session (thread-safe)
    session: Arc<Mutex<Session>>,
    /// Model input name
    input_name: String,
    /// Model output name
    output_name: String,
    /// Where the weights were loaded from
    model_path: PathBuf,
}

impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .finish_non_exhaustive()
    }
}

impl OnnxClassifier {
    /// Load the classifier weights from disk
    ///
    /// # Arguments
    /// - `model_path`: Path to the exported ONNX model file
    /// - `intra_threads`: Threads ONNX Runtime may use inside one run
    ///
    /// # Errors
    /// Returns error if:
    /// - Model file not found
    /// - ONNX Runtime initialization fails
    /// - Model exposes no inputs or outputs
    pub fn load<P: AsRef<Path>>(model_path: P, intra_threads: usize) -> Result<Self> {
        let model_path = model_path.as_ref();

        if !model_path.exists() {
            anyhow::bail!("Classifier model not found: {}", model_path.display());
        }

        info!("Loading cat/dog classifier from {}", model_path.display());

        let session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(intra_threads.max(1))
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .context(format!(
                "Failed to load classifier model from {}",
                model_path.display()
            ))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| anyhow!("Classifier model declares no inputs"))?;

        let output_name = session
            .outputs
            .first()
            .map(|output| output.name.clone())
            .ok_or_else(|| anyhow!("Classifier model declares no outputs"))?;

        debug!(
            "Classifier loaded - input: {}, output: {}",
            input_name, output_name
        );
        info!("✅ Classifier loaded successfully (CPU-only)");

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            input_name,
            output_name,
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, input: &Array4<f32>) -> Result<f32> {
        let size = CLASSIFIER_INPUT_SIZE as usize;
        if input.shape() != [1, size, size, CLASSIFIER_CHANNELS] {
            anyhow::bail!(
                "Invalid input shape: {:?}, expected [1, {}, {}, {}]",
                input.shape(),
                size,
                size,
                CLASSIFIER_CHANNELS
            );
        }

        let input_value =
            Value::from_array(input.to_owned()).context("Failed to create input tensor")?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| anyhow!("Classifier session lock poisoned"))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_value])
            .context("Classifier inference failed")?;

        let output_tensor = outputs[self.output_name.as_str()]
            .try_extract_array::<f32>()
            .context("Failed to extract output tensor")?;

        debug!("Classifier output shape: {:?}", output_tensor.shape());

        let score = output_tensor
            .iter()
            .next()
            .copied()
            .ok_or_else(|| anyhow!("Classifier produced an empty output tensor"))?;

        if !score.is_finite() {
            anyhow::bail!("Classifier produced a non-finite output: {}", score);
        }

        Ok(score)
    }
}
