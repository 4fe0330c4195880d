//! Composite score computation and ranking.
//!
//! S(c) = Σ(w_i × n_i) over the four normalised metrics, where n_i is the
//! min-max rescaled value of metric i within the filtered subset.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use equirank_common::config::{DegeneratePolicy, ScoringConfig};

use crate::dataset::{Company, Metric};
use crate::normalise::normalise_metric;
use crate::weights::WeightVector;

/// Weights plus the rule for collapsed ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringModel {
    pub weights: WeightVector,
    pub policy: DegeneratePolicy,
}

impl From<&ScoringConfig> for ScoringModel {
    fn from(cfg: &ScoringConfig) -> Self {
        Self {
            weights: WeightVector::from(cfg),
            policy: cfg.degenerate_policy,
        }
    }
}

/// Normalised component scores (all in [0, 1]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub revenue_growth: f64,
    pub profit_margin: f64,
    pub roe: f64,
    pub esg_score: f64,
}

impl ComponentScores {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::RevenueGrowth => self.revenue_growth,
            Metric::ProfitMargin => self.profit_margin,
            Metric::Roe => self.roe,
            Metric::EsgScore => self.esg_score,
        }
    }

    pub fn as_array(&self) -> [f64; 4] {
        Metric::ALL.map(|m| self.get(m))
    }
}

/// A company with its normalised components and composite score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCompany {
    #[serde(flatten)]
    pub company: Company,
    #[serde(rename = "Score")]
    pub score: f64,
    pub components: ComponentScores,
}

/// Compute the composite score given normalised components and weights.
pub fn compute_composite_score(normed: &ComponentScores, weights: &WeightVector) -> f64 {
    normed
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(n, w)| n * w)
        .sum()
}

/// Score every company in the subset, keeping input order.
pub fn score_companies(subset: &[&Company], model: &ScoringModel) -> Vec<ScoredCompany> {
    let [rg, pm, roe, esg] =
        Metric::ALL.map(|m| normalise_metric(subset, m, model.policy));

    subset
        .iter()
        .enumerate()
        .map(|(i, company)| {
            let components = ComponentScores {
                revenue_growth: rg[i],
                profit_margin: pm[i],
                roe: roe[i],
                esg_score: esg[i],
            };
            let score = compute_composite_score(&components, &model.weights);
            ScoredCompany {
                company: (*company).clone(),
                score,
                components,
            }
        })
        .collect()
}

/// Sort descending by score. The sort is stable, so equal scores keep
/// their input order.
pub fn rank_scored(mut scored: Vec<ScoredCompany>) -> Vec<ScoredCompany> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Score and rank a filtered subset.
pub fn rank_companies(subset: &[&Company], model: &ScoringModel) -> Vec<ScoredCompany> {
    let ranked = rank_scored(score_companies(subset, model));
    if let Some(top) = ranked.first() {
        debug!("Ranked {} companies, top: {} ({:.3})", ranked.len(), top.company.name, top.score);
    }
    ranked
}
