//! equirank-common — Shared error types and configuration used across all equirank crates.

pub mod error;
pub mod config;

// Re-export commonly used types
pub use config::{DashboardConfig, ServerConfig, ScoringConfig, ControlsConfig, SliderConfig, DegeneratePolicy};
pub use error::{EquirankError, ApiError, Result};
