use serde::Serialize;

use super::{Person, ValidationItem};
use crate::domain::stage::Stage;
use crate::domain::status::CanonicalStatus;

/// The smallest unit of tracked work.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseItem {
    pub id: String,
    pub ticket_id: String,
    /// Title with the stage token removed
    pub name: String,
    pub url: String,
    /// Estimate in weeks, in steps of 0.5
    pub effort: f64,
    pub area_ids: Vec<String>,
    pub teams: Vec<String>,
    pub status: CanonicalStatus,
    pub stage: Stage,
    pub assignee: Option<Person>,
    pub is_external: bool,
    pub validations: Vec<ValidationItem>,
    pub roadmap_item_id: Option<String>,
    pub cycle_id: String,
}
