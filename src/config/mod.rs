// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration
//!
//! Values come from CLI flags with environment fallbacks (see `crate::cli`);
//! `ServerConfig` is the validated result handed to the HTTP server.

pub mod cors;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

use crate::classifier::{prediction::MAX_PRECISION, DEFAULT_MODEL_PATH};
use crate::cli::Cli;
use crate::vision::image_utils::MAX_IMAGE_SIZE;

pub use cors::{CorsConfig, CorsOrigins, CORS_ORIGIN_ENV};

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 3000;

/// Decimal places of the reported probabilities
pub const DEFAULT_PRECISION: u32 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CORS_ORIGIN environment variable is not set")]
    MissingCorsOrigin,

    #[error("CORS_ORIGIN does not contain any origin")]
    EmptyCorsOrigin,

    #[error("Invalid CORS origin: {0:?}")]
    InvalidCorsOrigin(String),

    #[error("Invalid bind host: {0}")]
    InvalidHost(String),

    #[error("Prediction precision must be between 1 and {max}, got {0}", max = MAX_PRECISION)]
    InvalidPrecision(u32),

    #[error("Maximum upload size must be greater than 0")]
    InvalidUploadLimit,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub model_path: PathBuf,
    /// Decimal places of the reported probabilities (2 or 4 in practice)
    pub precision: u32,
    pub max_upload_bytes: usize,
    pub intra_threads: usize,
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            precision: DEFAULT_PRECISION,
            max_upload_bytes: MAX_IMAGE_SIZE,
            intra_threads: 4,
            cors: CorsConfig::allow_any(),
        }
    }
}

impl ServerConfig {
    /// Validate parsed command line arguments
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let host: IpAddr = cli
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(cli.host.clone()))?;

        if cli.precision == 0 || cli.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(cli.precision));
        }

        if cli.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidUploadLimit);
        }

        let cors = CorsConfig::resolve(cli.cors_origin.as_deref(), cli.allow_any_origin)?;

        Ok(Self {
            host,
            port: cli.port,
            model_path: cli.model_path.clone(),
            precision: cli.precision,
            max_upload_bytes: cli.max_upload_bytes,
            intra_threads: cli.intra_threads,
            cors,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
