//! Domain layer: the pure transformation engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (percentages, cycle state, tracker dates)
//! - `engine_config` - Read-only engine configuration
//! - `tracker` - Raw tracker record shapes
//! - `labels` - Label extraction and translation
//! - `stage` - Stage resolution from titles
//! - `status` - Canonical status resolution
//! - `roadmap` - Cycle, initiative, roadmap item and release item model
//! - `parsing` - Release item and roadmap item parsers, grouping
//! - `progress` - Progress metrics and breakdowns
//! - `report` - Cycle report assembly

pub mod engine_config;
pub mod foundation;
pub mod labels;
pub mod parsing;
pub mod progress;
pub mod report;
pub mod roadmap;
pub mod stage;
pub mod status;
pub mod tracker;
