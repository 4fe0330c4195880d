//! CSV export of the ranked table.

use equirank_common::error::{EquirankError, Result};

use crate::scorer::ScoredCompany;

pub const CSV_FILENAME: &str = "ranked_companies.csv";
pub const CSV_MIME: &str = "text/csv";

pub const CSV_COLUMNS: [&str; 12] = [
    "Company",
    "Industry",
    "Region",
    "MarketCap",
    "RevenueGrowth",
    "ProfitMargin",
    "ROE",
    "ESGScore",
    "SharpeRatio",
    "Beta",
    "EPS",
    "Score",
];

/// Float rendering for tables: shortest round-trip form, with at least one
/// decimal place so `1.0` does not collapse to `1`.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn row(s: &ScoredCompany) -> [String; 12] {
    let c = &s.company;
    [
        c.name.clone(),
        c.industry.clone(),
        c.region.clone(),
        c.market_cap.to_string(),
        format_decimal(c.revenue_growth),
        format_decimal(c.profit_margin),
        format_decimal(c.roe),
        c.esg_score.to_string(),
        format_decimal(c.sharpe_ratio),
        format_decimal(c.beta),
        format_decimal(c.eps),
        format_decimal(s.score),
    ]
}

/// Serialise ranked rows in rank order. The header is always written,
/// so an empty ranking yields a header-only file.
pub fn to_csv(ranked: &[ScoredCompany]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS)?;
    for s in ranked {
        writer.write_record(row(s))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| EquirankError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| EquirankError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
