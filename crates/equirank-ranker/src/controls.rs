//! Bounds and defaults of the interactive filter controls.

use serde::Serialize;

use equirank_common::config::{ControlsConfig, SliderConfig};

use crate::dataset::Dataset;
use crate::filter::FilterCriteria;

/// Market-cap sliders, bounded by the dataset's own min and max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketCapRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    /// Sorted; the first entry is the default selection
    pub industries: Vec<String>,
    /// Sorted; the first entry is the default selection
    pub regions: Vec<String>,
    pub market_cap: MarketCapRange,
    pub roe: SliderConfig,
    pub esg: SliderConfig,
}

impl Controls {
    pub fn from_dataset(dataset: &Dataset, config: &ControlsConfig) -> Self {
        let (min, max) = dataset.market_cap_bounds().unwrap_or((0, 0));
        Self {
            industries: dataset.industries(),
            regions: dataset.regions(),
            market_cap: MarketCapRange { min, max },
            roe: config.roe_slider,
            esg: config.esg_slider,
        }
    }

    /// Criteria the dashboard opens with.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            industry: self.industries.first().cloned().unwrap_or_default(),
            region: self.regions.first().cloned().unwrap_or_default(),
            cap_min: self.market_cap.min,
            cap_max: self.market_cap.max,
            roe_min: self.roe.default,
            esg_min: self.esg.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reference_controls() {
        let controls = Controls::from_dataset(&Dataset::reference(), &ControlsConfig::default());
        assert_eq!(controls.market_cap, MarketCapRange { min: 1400, max: 5000 });
        assert_eq!(controls.roe, SliderConfig { min: 0.0, max: 30.0, default: 15.0 });
        assert_eq!(controls.esg, SliderConfig { min: 0.0, max: 100.0, default: 70.0 });
    }

    #[test]
    fn test_default_criteria() {
        let controls = Controls::from_dataset(&Dataset::reference(), &ControlsConfig::default());
        let criteria = controls.default_criteria();
        assert_eq!(
            criteria,
            FilterCriteria {
                industry: "Energy".into(),
                region: "Asia".into(),
                cap_min: 1400,
                cap_max: 5000,
                roe_min: 15.0,
                esg_min: 70.0,
            }
        );
        assert!(criteria.validate(&controls).is_ok());
    }

    #[test]
    fn test_empty_dataset_controls() {
        let controls = Controls::from_dataset(&Dataset::new(vec![]), &ControlsConfig::default());
        let criteria = controls.default_criteria();
        assert!(criteria.industry.is_empty());
        assert_eq!((criteria.cap_min, criteria.cap_max), (0, 0));
    }
}
