//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod ranker;
pub mod export;
pub mod system;

use axum::extract::{rejection::QueryRejection, Query};
use equirank_common::error::ApiError;
use equirank_ranker::FilterCriteria;

use crate::state::{AppState, FilterQuery};

/// Turn a query extraction into validated criteria.
/// Malformed numbers and invalid ranges both become 400s.
pub(crate) fn criteria_from_query(
    state: &AppState,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<FilterCriteria, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state.resolve_criteria(query)
}
