use serde::Serialize;

use super::{Initiative, ReleaseItem, ResolvedArea, ResolvedTheme, ValidationItem};
use crate::domain::progress::ProgressMetrics;

/// Owning team used when no release item carries a team label.
pub const UNKNOWN_TEAM: &str = "unknown";

/// A customer-facing deliverable grouping one or more release items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    /// Tracker key; None for the bucket of parentless release items
    pub id: Option<String>,
    pub name: String,
    pub url: Option<String>,
    pub area: ResolvedArea,
    pub theme: ResolvedTheme,
    pub initiative_id: Option<String>,
    pub initiative: Option<Initiative>,
    pub owning_team: String,
    /// Always false until a roadmap-level release policy exists
    pub is_external: bool,
    pub release_items: Vec<ReleaseItem>,
    /// Always empty until roadmap-level checks exist
    pub validations: Vec<ValidationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressMetrics>,
}

impl RoadmapItem {
    /// Sum of the release items' effort, in weeks.
    pub fn total_effort(&self) -> f64 {
        self.release_items.iter().map(|item| item.effort).sum()
    }
}
