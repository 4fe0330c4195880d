//! Company records and the embedded reference dataset.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One row of the company metrics table.
///
/// Field names serialise to the dashboard's column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "Company")]
    pub name: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Region")]
    pub region: String,
    /// Market capitalisation, millions
    #[serde(rename = "MarketCap")]
    pub market_cap: u32,
    /// Percent
    #[serde(rename = "RevenueGrowth")]
    pub revenue_growth: f64,
    /// Percent
    #[serde(rename = "ProfitMargin")]
    pub profit_margin: f64,
    /// Return on equity, percent
    #[serde(rename = "ROE")]
    pub roe: f64,
    /// 0–100
    #[serde(rename = "ESGScore")]
    pub esg_score: u8,
    #[serde(rename = "SharpeRatio")]
    pub sharpe_ratio: f64,
    #[serde(rename = "Beta")]
    pub beta: f64,
    /// Earnings per share, last quarter
    #[serde(rename = "EPS")]
    pub eps: f64,
}

/// The four metrics that feed the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    RevenueGrowth,
    ProfitMargin,
    #[serde(rename = "ROE")]
    Roe,
    #[serde(rename = "ESGScore")]
    EsgScore,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::RevenueGrowth,
        Metric::ProfitMargin,
        Metric::Roe,
        Metric::EsgScore,
    ];

    /// Column label, matching the table header.
    pub fn label(self) -> &'static str {
        match self {
            Metric::RevenueGrowth => "RevenueGrowth",
            Metric::ProfitMargin => "ProfitMargin",
            Metric::Roe => "ROE",
            Metric::EsgScore => "ESGScore",
        }
    }

    /// Raw value of this metric for a company.
    pub fn value(self, company: &Company) -> f64 {
        match self {
            Metric::RevenueGrowth => company.revenue_growth,
            Metric::ProfitMargin => company.profit_margin,
            Metric::Roe => company.roe,
            Metric::EsgScore => f64::from(company.esg_score),
        }
    }
}

/// Immutable table of companies.
///
/// Built once at startup and shared by reference; nothing mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    companies: Vec<Company>,
}

impl Dataset {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// The nine-company reference table the dashboard ships with.
    pub fn reference() -> Self {
        #[rustfmt::skip]
        let rows: [(&str, &str, &str, u32, f64, f64, f64, u8, f64, f64, f64); 9] = [
            ("Alpha Energy",     "Energy",     "Europe",        2000, 12.5,  8.2, 16.3, 75, 1.2, 0.95, 1.25),
            ("Beta Power",       "Energy",     "Europe",        1500, 10.1,  7.5, 14.8, 80, 1.0, 1.10, 1.10),
            ("Gamma Oil",        "Energy",     "Europe",        1800, 15.0,  9.0, 17.5, 70, 1.1, 1.05, 1.30),
            ("Delta Renewables", "Energy",     "Europe",        1600, 18.2, 10.5, 19.0, 85, 1.3, 0.90, 1.45),
            ("Epsilon Gas",      "Energy",     "Europe",        1400,  9.8,  6.9, 13.2, 65, 0.9, 1.20, 0.95),
            ("Zeta Solar",       "Energy",     "Europe",        1700, 16.0, 11.0, 20.1, 90, 1.4, 0.85, 1.60),
            ("Omega Tech",       "Technology", "North America", 5000, 25.0, 18.0, 22.5, 88, 1.6, 1.00, 2.10),
            ("Sigma Health",     "Healthcare", "Asia",          3000, 20.0, 15.0, 21.0, 82, 1.5, 1.10, 1.80),
            ("Lambda Retail",    "Retail",     "Europe",        2500, 14.0,  9.5, 17.0, 78, 1.2, 1.15, 1.35),
        ];

        let companies = rows
            .iter()
            .map(|&(name, industry, region, market_cap, revenue_growth, profit_margin, roe, esg_score, sharpe_ratio, beta, eps)| {
                Company {
                    name: name.to_string(),
                    industry: industry.to_string(),
                    region: region.to_string(),
                    market_cap,
                    revenue_growth,
                    profit_margin,
                    roe,
                    esg_score,
                    sharpe_ratio,
                    beta,
                    eps,
                }
            })
            .collect();

        Self::new(companies)
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Distinct industries, sorted.
    pub fn industries(&self) -> Vec<String> {
        distinct_sorted(self.companies.iter().map(|c| c.industry.as_str()))
    }

    /// Distinct regions, sorted.
    pub fn regions(&self) -> Vec<String> {
        distinct_sorted(self.companies.iter().map(|c| c.region.as_str()))
    }

    /// `(min, max)` market cap over the whole table, `None` when empty.
    pub fn market_cap_bounds(&self) -> Option<(u32, u32)> {
        let min = self.companies.iter().map(|c| c.market_cap).min()?;
        let max = self.companies.iter().map(|c| c.market_cap).max()?;
        Some((min, max))
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
