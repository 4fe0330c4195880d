//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use crate::handlers::{
    dashboard::dashboard,
    export::export_csv,
    ranker::{api_controls, api_view},
    system::health,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // Downloads
        .route("/export/ranked_companies.csv", get(export_csv))

        // API endpoints
        .route("/api/controls", get(api_controls))
        .route("/api/view", get(api_view))
        .route("/health", get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
