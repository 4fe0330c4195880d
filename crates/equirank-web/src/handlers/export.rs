//! CSV download of the ranked table.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::info;

use equirank_common::error::ApiError;
use equirank_ranker::compute_view;
use equirank_ranker::export::{to_csv, CSV_FILENAME, CSV_MIME};

use crate::handlers::criteria_from_query;
use crate::state::{FilterQuery, SharedState};

/// GET /export/ranked_companies.csv
pub async fn export_csv(
    State(state): State<SharedState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let criteria = criteria_from_query(&state, query)?;
    let view = compute_view(&state.dataset, &criteria, &state.model);
    let csv = to_csv(&view.ranked)?;
    info!("Exporting {} ranked companies as CSV", view.ranked.len());

    let content_disposition = format!("attachment; filename=\"{}\"", CSV_FILENAME);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CSV_MIME.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition),
        ],
        csv,
    )
        .into_response())
}
