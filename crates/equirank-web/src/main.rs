//! equirank Web Server
//!
//! Run with: cargo run -p equirank-web

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use equirank_common::config::DashboardConfig;
use equirank_ranker::Dataset;
use equirank_web::{router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("equirank=debug,info")),
        )
        .init();

    info!("Starting equirank {}", env!("CARGO_PKG_VERSION"));

    let config = DashboardConfig::load()?;
    let dataset = Arc::new(Dataset::reference());
    info!("Loaded {} companies", dataset.len());

    let state = AppState::new(dataset, &config)?;
    let app = build_router(state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
    }
}
