//! Dashboard view model.
//!
//! `compute_view` is the whole engine in one pure call: filter the dataset,
//! score and rank the subset, then derive the chart series and profile
//! cards. Interface layers render the result; they never recompute it.

use serde::Serialize;
use tracing::debug;

use crate::dataset::{Dataset, Metric};
use crate::eps::{eps_series, EpsSeries};
use crate::export::format_decimal;
use crate::filter::FilterCriteria;
use crate::scorer::{rank_scored, score_companies, ScoredCompany, ScoringModel};

pub const SCORING_NOTE: &str = "Scores are calculated using a weighted average of normalized \
performance metrics. Sharpe Ratio, Beta, and EPS are shown for reference only.";

/// One bar of the score-breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownPoint {
    pub company: String,
    pub metric: Metric,
    pub normalized: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileLine {
    pub label: &'static str,
    pub value: String,
}

/// Expandable text summary for one ranked company.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub company: String,
    pub lines: Vec<ProfileLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    /// Descending by score
    pub ranked: Vec<ScoredCompany>,
    /// Filtered order, one point per (company, metric)
    pub breakdown: Vec<BreakdownPoint>,
    /// Filtered order
    pub eps: Vec<EpsSeries>,
    /// Ranked order
    pub profiles: Vec<CompanyProfile>,
    pub note: &'static str,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

pub fn compute_view(dataset: &Dataset, criteria: &FilterCriteria, model: &ScoringModel) -> DashboardView {
    let subset = criteria.apply(dataset.companies());
    let scored = score_companies(&subset, model);

    let breakdown = scored
        .iter()
        .flat_map(|s| {
            Metric::ALL.into_iter().map(move |metric| BreakdownPoint {
                company: s.company.name.clone(),
                metric,
                normalized: s.components.get(metric),
            })
        })
        .collect();

    let eps = subset.iter().map(|c| eps_series(c)).collect();

    let ranked = rank_scored(scored);
    let profiles = ranked.iter().map(profile).collect();

    debug!(
        "View for {}/{}: {} of {} companies matched",
        criteria.industry,
        criteria.region,
        ranked.len(),
        dataset.len()
    );

    DashboardView {
        criteria: criteria.clone(),
        ranked,
        breakdown,
        eps,
        profiles,
        note: SCORING_NOTE,
    }
}

fn profile(s: &ScoredCompany) -> CompanyProfile {
    let c = &s.company;
    let line = |label, value: String| ProfileLine { label, value };
    CompanyProfile {
        company: c.name.clone(),
        lines: vec![
            line("Industry", c.industry.clone()),
            line("Region", c.region.clone()),
            line("Market Cap", format!("{} M", c.market_cap)),
            line("Revenue Growth", format!("{}%", format_decimal(c.revenue_growth))),
            line("Profit Margin", format!("{}%", format_decimal(c.profit_margin))),
            line("ROE", format!("{}%", format_decimal(c.roe))),
            line("ESG Score", c.esg_score.to_string()),
            line("Sharpe Ratio", format_decimal(c.sharpe_ratio)),
            line("Beta", format_decimal(c.beta)),
            line("EPS (Last Quarter)", format_decimal(c.eps)),
            line("Composite Score", format!("{:.2}", s.score)),
        ],
    }
}
