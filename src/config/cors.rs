// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Cross-origin configuration parsed from `CORS_ORIGIN`

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::ConfigError;

/// Environment variable holding the allowed origins
pub const CORS_ORIGIN_ENV: &str = "CORS_ORIGIN";

/// Origins permitted to call the service
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `*`: any origin
    Any,
    /// Explicit list of origins
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// Value of `CORS_ORIGIN` as it was provided, echoed by `GET /env`
    pub raw: Option<String>,
    pub origins: CorsOrigins,
}

impl CorsConfig {
    /// Allow every origin without a configured value
    pub fn allow_any() -> Self {
        Self {
            raw: None,
            origins: CorsOrigins::Any,
        }
    }

    /// Parse a comma-separated origin list, e.g. `"a.com, b.com"`
    ///
    /// Entries are trimmed and empty entries dropped. A `*` entry allows any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let origins = split_origins(raw);

        if origins.is_empty() {
            return Err(ConfigError::EmptyCorsOrigin);
        }

        let origins = if origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            for origin in &origins {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?;
            }
            CorsOrigins::List(origins)
        };

        Ok(Self {
            raw: Some(raw.to_string()),
            origins,
        })
    }

    /// Resolve the configured value
    ///
    /// A missing value is fatal unless `allow_any_fallback` is set.
    pub fn resolve(value: Option<&str>, allow_any_fallback: bool) -> Result<Self, ConfigError> {
        match value {
            Some(raw) => Self::parse(raw),
            None if allow_any_fallback => Ok(Self::allow_any()),
            None => Err(ConfigError::MissingCorsOrigin),
        }
    }

    pub fn allows_any(&self) -> bool {
        self.origins == CorsOrigins::Any
    }

    /// Build the tower-http layer. All methods and headers are allowed.
    pub fn to_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        match &self.origins {
            CorsOrigins::Any => layer.allow_origin(Any),
            CorsOrigins::List(origins) => {
                // validated in parse()
                let values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|o| HeaderValue::from_str(o).ok())
                    .collect();
                layer.allow_origin(AllowOrigin::list(values))
            }
        }
    }
}

/// Split on commas, trim, and drop empty entries
pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
