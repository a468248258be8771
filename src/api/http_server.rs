// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;

use super::handlers::{env_handler, health_handler, home_handler};
use super::predict::predict_handler;
use crate::classifier::Classifier;
use crate::config::ServerConfig;

/// Room for multipart boundaries and part headers on top of the image itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn Classifier>, config: ServerConfig) -> Self {
        Self {
            classifier,
            config: Arc::new(config),
        }
    }

    /// State with default configuration (any origin, 4 decimals)
    pub fn new_for_test(classifier: Arc<dyn Classifier>) -> Self {
        Self::new(classifier, ServerConfig::default())
    }
}

/// Build the router with every route registered explicitly
pub fn create_app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;
    let cors = state.config.cors.to_layer();

    Router::new()
        .route("/", get(home_handler))
        .route("/predict", post(predict_handler))
        .route("/env", get(env_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn start_server(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
