//! Shared application state for the web server.

use std::sync::Arc;

use minijinja::Environment;
use serde::Deserialize;

use equirank_common::config::DashboardConfig;
use equirank_common::error::{ApiError, EquirankError, Result};
use equirank_ranker::{Controls, Dataset, FilterCriteria, ScoringModel};

pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";

/// Filter criteria as they arrive in the query string.
/// Missing fields fall back to the control defaults.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub industry: Option<String>,
    pub region: Option<String>,
    pub cap_min: Option<u32>,
    pub cap_max: Option<u32>,
    pub roe_min: Option<f64>,
    pub esg_min: Option<f64>,
}

/// Shared state injected into every Axum handler.
/// Built once at startup, read-only afterwards.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub controls: Controls,
    pub model: ScoringModel,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Result<Self> {
        let controls = Controls::from_dataset(&dataset, &config.controls);
        let model = ScoringModel::from(&config.scoring);

        let mut templates = Environment::new();
        templates
            .add_template(DASHBOARD_TEMPLATE, include_str!("../templates/dashboard.html"))
            .map_err(|e| EquirankError::Template(e.to_string()))?;

        Ok(Self { dataset, controls, model, templates })
    }

    /// Reference dataset with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(Arc::new(Dataset::reference()), &DashboardConfig::default())
    }

    /// Merge the query with control defaults and validate at the boundary.
    pub fn resolve_criteria(&self, query: FilterQuery) -> std::result::Result<FilterCriteria, ApiError> {
        let defaults = self.controls.default_criteria();
        let criteria = FilterCriteria {
            industry: query.industry.unwrap_or(defaults.industry),
            region: query.region.unwrap_or(defaults.region),
            cap_min: query.cap_min.unwrap_or(defaults.cap_min),
            cap_max: query.cap_max.unwrap_or(defaults.cap_max),
            roe_min: query.roe_min.unwrap_or(defaults.roe_min),
            esg_min: query.esg_min.unwrap_or(defaults.esg_min),
        };
        criteria.validate(&self.controls)?;
        Ok(criteria)
    }
}

pub type SharedState = Arc<AppState>;
