//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and enums that the reporting model is built
//! from: percentages, cycle lifecycle state and tracker timestamps.

mod cycle_state;
mod percentage;
mod tracker_date;

pub use cycle_state::CycleState;
pub use percentage::Percentage;
pub use tracker_date::parse_tracker_date;
