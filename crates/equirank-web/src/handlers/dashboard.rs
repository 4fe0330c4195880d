//! Dashboard handler — the single HTML page.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use minijinja::context;

use equirank_common::error::ApiError;
use equirank_ranker::compute_view;
use equirank_ranker::export::CSV_FILENAME;

use crate::handlers::criteria_from_query;
use crate::state::{FilterQuery, SharedState, DASHBOARD_TEMPLATE};

/// GET / — Filter controls, ranked table, charts, profiles and export link
pub async fn dashboard(
    State(state): State<SharedState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let criteria = criteria_from_query(&state, query)?;
    let view = compute_view(&state.dataset, &criteria, &state.model);

    let html = state
        .templates
        .get_template(DASHBOARD_TEMPLATE)
        .and_then(|tmpl| {
            tmpl.render(context! {
                view => &view,
                controls => &state.controls,
                weights => &state.model.weights,
                csv_filename => CSV_FILENAME,
            })
        })
        .map_err(|e| ApiError::Internal(format!("template rendering failed: {e}")))?;

    Ok(Html(html))
}
