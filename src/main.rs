// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Courtfinder API Server
//!
//! Serves an in-memory tennis court catalog: search, ranked listings, and
//! review submission with live aggregate ratings.

use courtfinder::{
    config::Config,
    services::{CatalogService, ReviewStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Courtfinder API");

    // Load the court catalog seed
    tracing::info!(path = %config.catalog_path, "Loading court catalog");
    let catalog =
        CatalogService::load_from_file(&config.catalog_path).expect("Failed to load court catalog");
    tracing::info!(count = catalog.courts().len(), "Court catalog loaded");

    // Seed the review store from the catalog
    let review_store = ReviewStore::seeded_from(&catalog);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        review_store,
    });

    // Build router
    let app = courtfinder::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("courtfinder=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
