// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use catdog_classifier_node::{
    api::{start_server, AppState},
    classifier::OnnxClassifier,
    cli::Cli,
    config::ServerConfig,
    version,
};
use clap::Parser;
use std::{env, sync::Arc};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🚀 Starting {}...\n", version::get_version_string());
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!();

    let cli = Cli::parse();
    let config = ServerConfig::from_cli(&cli).context("Invalid configuration")?;

    match &config.cors.raw {
        Some(raw) => tracing::info!("CORS origins: {}", raw),
        None => tracing::info!("CORS origins: * (CORS_ORIGIN not set)"),
    }

    println!("🧠 Loading classifier...");
    let classifier = OnnxClassifier::load(&config.model_path, config.intra_threads)
        .context("Failed to load classifier")?;
    println!("✅ Classifier ready: {}", classifier.model_path().display());

    println!("🌐 Serving on http://{}", config.bind_addr());
    println!("   GET  /         - liveness text");
    println!("   POST /predict  - classify an uploaded image (field: image_file)");
    println!("   GET  /env      - configured CORS_ORIGIN");
    println!("   GET  /health   - health and version");

    let state = AppState::new(Arc::new(classifier), config);
    start_server(state).await
}
