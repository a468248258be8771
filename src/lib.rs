// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod version;
pub mod vision;

pub use api::{create_app, start_server, AppState, PredictError};
pub use classifier::{Classifier, OnnxClassifier, Prediction};
pub use config::{ConfigError, CorsConfig, ServerConfig};
