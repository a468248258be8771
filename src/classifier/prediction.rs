// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::Serialize;

/// Largest supported number of decimal places (f32 keeps ~7 significant digits)
pub const MAX_PRECISION: u32 = 6;

/// Class probabilities for one image. `cat` is always `1 - dog`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub cat: f32,
    pub dog: f32,
}

impl Prediction {
    /// Build from the single sigmoid output of the network.
    pub fn from_dog_probability(probability: f32) -> Self {
        let dog = probability.clamp(0.0, 1.0);
        Self { cat: 1.0 - dog, dog }
    }

    /// Render both probabilities with `decimals` places.
    pub fn formatted(&self, decimals: u32) -> FormattedPrediction {
        FormattedPrediction {
            cat: format_probability(self.cat, decimals),
            dog: format_probability(self.dog, decimals),
        }
    }
}

/// Wire form of a prediction: `{"cat": "0.13", "dog": "0.87"}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedPrediction {
    pub cat: String,
    pub dog: String,
}

/// Round to `decimals` places and print the shortest representation,
/// keeping at least one fractional digit ("0.5", "1.0", "0.8731").
pub fn format_probability(value: f32, decimals: u32) -> String {
    let decimals = decimals.min(MAX_PRECISION);
    let factor = 10f32.powi(decimals as i32);
    let mut rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        // avoid "-0"
        rounded = 0.0;
    }

    let text = rounded.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}
