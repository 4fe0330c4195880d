//! Filter criteria and the row predicate.

use serde::{Deserialize, Serialize};

use equirank_common::error::{EquirankError, Result};

use crate::controls::Controls;
use crate::dataset::Company;

/// User-selected filter. All six predicates must hold for a row to pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact match, case-sensitive
    pub industry: String,
    /// Exact match, case-sensitive
    pub region: String,
    /// Inclusive
    pub cap_min: u32,
    /// Inclusive
    pub cap_max: u32,
    pub roe_min: f64,
    pub esg_min: f64,
}

impl FilterCriteria {
    pub fn matches(&self, company: &Company) -> bool {
        company.industry == self.industry
            && company.region == self.region
            && company.market_cap >= self.cap_min
            && company.market_cap <= self.cap_max
            && company.roe >= self.roe_min
            && f64::from(company.esg_score) >= self.esg_min
    }

    /// Rows that satisfy every predicate, in input order.
    pub fn apply<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        companies.iter().filter(|c| self.matches(c)).collect()
    }

    /// Boundary check for user input. The engine assumes criteria passed here.
    ///
    /// Unknown industries or regions are allowed; they match nothing.
    pub fn validate(&self, controls: &Controls) -> Result<()> {
        if self.cap_min > self.cap_max {
            return Err(EquirankError::InvalidCriteria(format!(
                "cap_min ({}) is greater than cap_max ({})",
                self.cap_min, self.cap_max
            )));
        }
        if self.cap_min < controls.market_cap.min || self.cap_max > controls.market_cap.max {
            return Err(EquirankError::InvalidCriteria(format!(
                "market cap must be between {} and {}",
                controls.market_cap.min, controls.market_cap.max
            )));
        }
        if !self.roe_min.is_finite() || !controls.roe.contains(self.roe_min) {
            return Err(EquirankError::InvalidCriteria(format!(
                "roe_min must be between {} and {}",
                controls.roe.min, controls.roe.max
            )));
        }
        if !self.esg_min.is_finite() || !controls.esg.contains(self.esg_min) {
            return Err(EquirankError::InvalidCriteria(format!(
                "esg_min must be between {} and {}",
                controls.esg.min, controls.esg.max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use equirank_common::config::ControlsConfig;

    fn energy_europe(cap_max: u32) -> FilterCriteria {
        FilterCriteria {
            industry: "Energy".into(),
            region: "Europe".into(),
            cap_min: 1400,
            cap_max,
            roe_min: 15.0,
            esg_min: 70.0,
        }
    }

    fn names(rows: &[&Company]) -> Vec<String> {
        rows.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let ds = Dataset::reference();
        let industries = ds.industries();
        let regions = ds.regions();
        for industry in &industries {
            for region in &regions {
                for (cap_min, cap_max) in [(1400, 5000), (1500, 1800), (2000, 2000), (3000, 1400)] {
                    for roe_min in [0.0, 15.0, 17.5, 30.0] {
                        for esg_min in [0.0, 70.0, 85.0, 100.0] {
                            let criteria = FilterCriteria {
                                industry: industry.clone(),
                                region: region.clone(),
                                cap_min,
                                cap_max,
                                roe_min,
                                esg_min,
                            };
                            let kept = criteria.apply(ds.companies());
                            for c in &kept {
                                assert!(c.industry == *industry && c.region == *region);
                                assert!(c.market_cap >= cap_min && c.market_cap <= cap_max);
                                assert!(c.roe >= roe_min && f64::from(c.esg_score) >= esg_min);
                            }
                            let expected = ds.companies().iter().filter(|c| {
                                c.industry == *industry
                                    && c.region == *region
                                    && (cap_min..=cap_max).contains(&c.market_cap)
                                    && c.roe >= roe_min
                                    && f64::from(c.esg_score) >= esg_min
                            }).count();
                            assert_eq!(kept.len(), expected);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_energy_europe_inclusive_upper_bound() {
        let ds = Dataset::reference();
        let kept = energy_europe(2000).apply(ds.companies());
        // Alpha Energy sits exactly on the 2000 bound.
        assert_eq!(names(&kept), vec!["Alpha Energy", "Gamma Oil", "Delta Renewables", "Zeta Solar"]);
    }

    #[test]
    fn test_energy_europe_below_alpha() {
        let ds = Dataset::reference();
        let kept = energy_europe(1999).apply(ds.companies());
        assert_eq!(names(&kept), vec!["Gamma Oil", "Delta Renewables", "Zeta Solar"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let ds = Dataset::reference();
        let mut criteria = energy_europe(5000);
        criteria.industry = "Technology".into();
        assert!(criteria.apply(ds.companies()).is_empty());
    }

    #[test]
    fn test_no_case_normalisation() {
        let ds = Dataset::reference();
        let mut criteria = energy_europe(5000);
        criteria.industry = "energy".into();
        assert!(criteria.apply(ds.companies()).is_empty());
    }

    #[test]
    fn test_validate_rejects_inverted_cap_range() {
        let controls = Controls::from_dataset(&Dataset::reference(), &ControlsConfig::default());
        let criteria = energy_europe(1000);
        assert!(matches!(criteria.validate(&controls), Err(EquirankError::InvalidCriteria(_))));
    }

    #[test]
    fn test_validate_rejects_cap_outside_dataset_bounds() {
        let controls = Controls::from_dataset(&Dataset::reference(), &ControlsConfig::default());

        let mut criteria = energy_europe(2000);
        criteria.cap_min = 0;
        assert!(matches!(criteria.validate(&controls), Err(EquirankError::InvalidCriteria(_))));

        assert!(energy_europe(6000).validate(&controls).is_err());

        // Both ends of the dataset range are accepted.
        assert!(energy_europe(5000).validate(&controls).is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_sliders() {
        let controls = Controls::from_dataset(&Dataset::reference(), &ControlsConfig::default());
        let mut criteria = energy_europe(2000);
        criteria.esg_min = 120.0;
        assert!(criteria.validate(&controls).is_err());

        let mut criteria = energy_europe(2000);
        criteria.roe_min = f64::NAN;
        assert!(criteria.validate(&controls).is_err());

        assert!(energy_europe(2000).validate(&controls).is_ok());
    }
}
