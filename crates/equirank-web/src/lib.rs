//! equirank-web — Web dashboard for equirank
//! Provides a single-page stock selector with:
//!   - Filter controls (industry, region, market cap, ROE, ESG)
//!   - Ranked company table with composite scores
//!   - Score breakdown and EPS trend series
//!   - Company profile cards
//!   - CSV export of the ranked table

pub mod router;
pub mod handlers;
pub mod state;
