//! Weight vector for the composite score.

use serde::{Deserialize, Serialize};

use equirank_common::config::ScoringConfig;

use crate::dataset::Metric;

/// The 4-component weight vector W.
/// Weights sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    pub revenue_growth: f64,
    pub profit_margin: f64,
    pub roe: f64,
    pub esg_score: f64,
}

impl Default for WeightVector {
    /// Equal weighting
    fn default() -> Self {
        Self {
            revenue_growth: 0.25,
            profit_margin:  0.25,
            roe:            0.25,
            esg_score:      0.25,
        }
    }
}

impl From<&ScoringConfig> for WeightVector {
    fn from(cfg: &ScoringConfig) -> Self {
        Self {
            revenue_growth: cfg.revenue_growth,
            profit_margin: cfg.profit_margin,
            roe: cfg.roe,
            esg_score: cfg.esg_score,
        }
    }
}

impl WeightVector {
    /// Validate that all weights are non-negative and sum to ~1.0
    pub fn validate(&self) -> bool {
        let arr = self.as_array();
        let sum: f64 = arr.iter().sum();
        arr.iter().all(|w| *w >= 0.0) && (sum - 1.0).abs() < 1e-6
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum: f64 = self.as_array().iter().sum();
        if sum > 0.0 {
            self.revenue_growth /= sum;
            self.profit_margin  /= sum;
            self.roe            /= sum;
            self.esg_score      /= sum;
        }
    }

    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::RevenueGrowth => self.revenue_growth,
            Metric::ProfitMargin => self.profit_margin,
            Metric::Roe => self.roe,
            Metric::EsgScore => self.esg_score,
        }
    }

    /// Convert to array for iteration, in `Metric::ALL` order.
    pub fn as_array(&self) -> [f64; 4] {
        Metric::ALL.map(|m| self.weight(m))
    }
}
