// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;
use std::path::PathBuf;

use crate::classifier::DEFAULT_MODEL_PATH;
use crate::config::{DEFAULT_PORT, DEFAULT_PRECISION};
use crate::vision::image_utils::MAX_IMAGE_SIZE;

/// Cat/dog image classifier HTTP node
#[derive(Parser, Debug, Clone)]
#[command(name = "catdog-classifier-node")]
#[command(version)]
#[command(about = "Serves cat/dog predictions for uploaded images", long_about = None)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the ONNX classifier weights
    #[arg(long, env = "MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Comma-separated list of allowed origins, or `*`
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Allow any origin when CORS_ORIGIN is unset (legacy behaviour)
    #[arg(long, env = "ALLOW_ANY_ORIGIN")]
    pub allow_any_origin: bool,

    /// Decimal places of the returned probabilities
    #[arg(long, env = "PREDICTION_PRECISION", default_value_t = DEFAULT_PRECISION)]
    pub precision: u32,

    /// Largest accepted upload, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = MAX_IMAGE_SIZE)]
    pub max_upload_bytes: usize,

    /// ONNX Runtime intra-op threads
    #[arg(long, env = "ORT_INTRA_THREADS", default_value_t = 4)]
    pub intra_threads: usize,
}
