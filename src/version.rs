// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the cat/dog classifier node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-shared-model-2026-10-16";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-16";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "multipart-upload",
    "onnx-classifier",
    "shared-model-handle",
    "configurable-cors",
    "configurable-precision",
    "graceful-shutdown",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Cat/Dog Classifier Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
