// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image prediction endpoint

pub mod handler;
pub mod upload;

pub use handler::{classify_image_bytes, predict_handler};
pub use upload::{ImageUpload, IMAGE_FIELD};
