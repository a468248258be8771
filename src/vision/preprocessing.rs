// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image preprocessing for the cat/dog classifier

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use ndarray::Array4;

/// Target size for the MobileNet backbone
pub const CLASSIFIER_INPUT_SIZE: u32 = 224;

/// Number of color channels fed to the network
pub const CLASSIFIER_CHANNELS: usize = 3;

/// MobileNet scales pixels to [-1, 1]: `pixel / 127.5 - 1`
pub const MOBILENET_SCALE: f32 = 127.5;

/// Preprocess an image for the classifier
///
/// Steps:
/// 1. Convert to RGB (drops alpha, expands grayscale)
/// 2. Resize to CLASSIFIER_INPUT_SIZE x CLASSIFIER_INPUT_SIZE, ignoring aspect ratio
/// 3. Convert to f32 and normalize with MobileNet scaling
/// 4. Add a leading batch dimension: NHWC tensor [1, 224, 224, 3]
pub fn preprocess_for_classifier(image: &DynamicImage) -> Array4<f32> {
    let resized = resize_for_classifier(image, CLASSIFIER_INPUT_SIZE);
    let size = CLASSIFIER_INPUT_SIZE as usize;

    Array4::from_shape_fn((1, size, size, CLASSIFIER_CHANNELS), |(_, y, x, c)| {
        normalize_pixel(resized.get_pixel(x as u32, y as u32)[c])
    })
}

/// Force RGB and stretch to a square of `target_size`
pub fn resize_for_classifier(image: &DynamicImage, target_size: u32) -> RgbImage {
    let rgb = image.to_rgb8();
    image::imageops::resize(&rgb, target_size, target_size, FilterType::CatmullRom)
}

/// Scale a single channel value from [0, 255] to [-1, 1]
#[inline]
pub fn normalize_pixel(value: u8) -> f32 {
    value as f32 / MOBILENET_SCALE - 1.0
}
