//! Progress aggregation.
//!
//! Weeks-based delivery metrics computed bottom-up: release items roll up
//! into roadmap items, roadmap items into initiatives, and everything into
//! the cycle overview. Metrics are a derived view and are recomputed on
//! every run.

mod aggregator;
mod breakdown;
mod metrics;

pub use aggregator::{sort_initiatives_by_weeks, CycleOverview, ProgressAggregator};
pub use breakdown::ProgressBreakdown;
pub use metrics::ProgressMetrics;
