//! Ranking API — JSON view of the scoring engine.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use equirank_common::error::ApiError;
use equirank_ranker::{compute_view, Controls, DashboardView};

use crate::handlers::criteria_from_query;
use crate::state::{FilterQuery, SharedState};

/// GET /api/controls — Control options, bounds and defaults
pub async fn api_controls(State(state): State<SharedState>) -> Json<Controls> {
    Json(state.controls.clone())
}

/// GET /api/view — Ranked table, chart series and profiles for the criteria
pub async fn api_view(
    State(state): State<SharedState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<DashboardView>, ApiError> {
    let criteria = criteria_from_query(&state, query)?;
    Ok(Json(compute_view(&state.dataset, &criteria, &state.model)))
}
