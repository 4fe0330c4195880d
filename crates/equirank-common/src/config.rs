//! Dashboard configuration.
//!
//! Reads `equirank.toml` from the current directory or the path in the
//! `EQUIRANK_CONFIG` env var. YAML and JSON files are accepted as well,
//! chosen by extension. Every field has a default, so an absent default
//! file simply yields `DashboardConfig::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EquirankError, Result};

pub const CONFIG_ENV_VAR: &str = "EQUIRANK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "equirank.toml";

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Scoring weights and degenerate-range policy
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Slider bounds for the filter controls
    #[serde(default)]
    pub controls: ControlsConfig,
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

/// What a normalised value becomes when the subset's min equals its max
/// (a single record, or every record sharing the same value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// 0.5
    #[default]
    Midpoint,
    /// 1.0
    Top,
    /// 0.0
    Bottom,
}

impl DegeneratePolicy {
    pub fn value(self) -> f64 {
        match self {
            DegeneratePolicy::Midpoint => 0.5,
            DegeneratePolicy::Top => 1.0,
            DegeneratePolicy::Bottom => 0.0,
        }
    }
}

/// Scoring weights for the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_weight")]
    pub revenue_growth: f64,

    #[serde(default = "default_weight")]
    pub profit_margin: f64,

    #[serde(default = "default_weight")]
    pub roe: f64,

    #[serde(default = "default_weight")]
    pub esg_score: f64,

    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

fn default_weight() -> f64 { 0.25 }

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            revenue_growth: default_weight(),
            profit_margin: default_weight(),
            roe: default_weight(),
            esg_score: default_weight(),
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl ScoringConfig {
    fn weights(&self) -> [f64; 4] {
        [self.revenue_growth, self.profit_margin, self.roe, self.esg_score]
    }

    /// Validate weights are non-negative and sum to 1.0
    pub fn validate(&self) -> bool {
        let weights = self.weights();
        let sum: f64 = weights.iter().sum();
        weights.iter().all(|w| w.is_finite() && *w >= 0.0) && (sum - 1.0).abs() < 1e-6
    }

    /// Normalize weights to sum to 1.0
    pub fn normalize(&mut self) {
        let sum: f64 = self.weights().iter().sum();
        if sum > 0.0 {
            self.revenue_growth /= sum;
            self.profit_margin /= sum;
            self.roe /= sum;
            self.esg_score /= sum;
        }
    }
}

// ── Controls ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderConfig {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_well_formed(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.contains(self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_roe_slider")]
    pub roe_slider: SliderConfig,

    #[serde(default = "default_esg_slider")]
    pub esg_slider: SliderConfig,
}

fn default_roe_slider() -> SliderConfig {
    SliderConfig { min: 0.0, max: 30.0, default: 15.0 }
}

fn default_esg_slider() -> SliderConfig {
    SliderConfig { min: 0.0, max: 100.0, default: 70.0 }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            roe_slider: default_roe_slider(),
            esg_slider: default_esg_slider(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load configuration from `EQUIRANK_CONFIG` or `equirank.toml`.
    ///
    /// A missing default file is not an error. A path named explicitly
    /// through the env var must exist.
    pub fn load() -> Result<Self> {
        let (path, explicit) = match std::env::var(CONFIG_ENV_VAR) {
            Ok(p) => (p, true),
            Err(_) => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        if !Path::new(&path).exists() {
            if explicit {
                return Err(EquirankError::Config(format!("config file not found: {path}")));
            }
            warn!("{} not found, using built-in defaults", path);
            return Ok(Self::default());
        }

        let config = Self::from_path(&path)?;
        info!("Configuration loaded from {}", path);
        Ok(config)
    }

    /// Load from a file, picking the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("toml")
            .to_ascii_lowercase();

        let config: Self = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            other => {
                return Err(EquirankError::Config(format!(
                    "unsupported config format: .{other}"
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scoring.validate() {
            return Err(EquirankError::Config(
                "scoring weights must be non-negative and sum to 1.0".to_string(),
            ));
        }
        if !self.controls.roe_slider.is_well_formed() {
            return Err(EquirankError::Config("invalid roe_slider bounds".to_string()));
        }
        if !self.controls.esg_slider.is_well_formed() {
            return Err(EquirankError::Config("invalid esg_slider bounds".to_string()));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
