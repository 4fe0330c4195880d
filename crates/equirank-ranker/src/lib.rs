//! equirank-ranker — Company filtering and composite scoring engine.
//!
//! Everything here is a pure function of an injected [`dataset::Dataset`]
//! and the caller's [`filter::FilterCriteria`]; [`view::compute_view`] is
//! the single entry point used by the dashboard.

pub mod dataset;
pub mod filter;
pub mod normalise;
pub mod weights;
pub mod scorer;
pub mod eps;
pub mod controls;
pub mod view;
pub mod export;

pub use dataset::{Company, Dataset, Metric};
pub use filter::FilterCriteria;
pub use scorer::{ScoredCompany, ScoringModel};
pub use controls::Controls;
pub use view::{compute_view, DashboardView};
