//! Synthetic quarterly EPS trend for the line chart.
//!
//! Presentation only: four points stepping up to the last reported EPS.
//! Derived on demand from the record's single EPS field, never stored.

use serde::{Deserialize, Serialize};

use crate::dataset::Company;

pub const EPS_QUARTERS: [&str; 4] = ["Q1 2023", "Q2 2023", "Q3 2023", "Q4 2023"];

/// Subtracted from the last EPS for Q1..Q4.
const EPS_OFFSETS: [f64; 4] = [0.15, 0.10, 0.05, 0.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsPoint {
    pub quarter: String,
    pub eps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsSeries {
    pub company: String,
    pub points: Vec<EpsPoint>,
}

pub fn quarterly_eps(eps: f64) -> [f64; 4] {
    EPS_OFFSETS.map(|offset| eps - offset)
}

pub fn eps_series(company: &Company) -> EpsSeries {
    let points = EPS_QUARTERS
        .iter()
        .zip(quarterly_eps(company.eps))
        .map(|(quarter, eps)| EpsPoint { quarter: quarter.to_string(), eps })
        .collect();
    EpsSeries { company: company.name.clone(), points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_quarterly_steps() {
        let expected = [1.10, 1.15, 1.20, 1.25];
        for (got, want) in quarterly_eps(1.25).iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        assert_eq!(quarterly_eps(1.25)[3], 1.25);
    }

    #[test]
    fn test_series_labels() {
        let ds = Dataset::reference();
        let series = eps_series(&ds.companies()[0]);
        assert_eq!(series.company, "Alpha Energy");
        let quarters: Vec<&str> = series.points.iter().map(|p| p.quarter.as_str()).collect();
        assert_eq!(quarters, EPS_QUARTERS);
        assert!((series.points[0].eps - 1.10).abs() < 1e-9);
    }
}
