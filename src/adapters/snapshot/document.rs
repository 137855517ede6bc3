//! On-disk snapshot format.
//!
//! ```json
//! {
//!   "cycles": [
//!     { "sprint": { "id": 42, "name": "Q1", "state": "active" },
//!       "issues": [ { "key": "REL-1", "fields": { "summary": "..." } } ] }
//!   ],
//!   "roadmapItems": {
//!     "ROADMAP-1": { "summary": "...", "labels": ["initiative:growth"] }
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::tracker::{RawIssue, RawRoadmapItemRecord, RawSprint};
use crate::ports::IssueSourceError;

/// One cycle with its issues.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCycle {
    pub sprint: RawSprint,
    #[serde(default)]
    pub issues: Vec<RawIssue>,
}

/// A captured view of the tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    #[serde(default)]
    pub cycles: Vec<SnapshotCycle>,
    #[serde(default)]
    pub roadmap_items: HashMap<String, RawRoadmapItemRecord>,
}

impl SnapshotDocument {
    /// Parses a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, IssueSourceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sprints(&self) -> Vec<RawSprint> {
        self.cycles.iter().map(|cycle| cycle.sprint.clone()).collect()
    }

    pub fn cycle(&self, cycle_id: &str) -> Result<&SnapshotCycle, IssueSourceError> {
        self.cycles
            .iter()
            .find(|cycle| cycle.sprint.id == cycle_id)
            .ok_or_else(|| IssueSourceError::CycleNotFound(cycle_id.to_string()))
    }

    /// Records for the known keys among `keys`.
    pub fn roadmap_items_for(&self, keys: &[String]) -> HashMap<String, RawRoadmapItemRecord> {
        keys.iter()
            .filter_map(|key| {
                self.roadmap_items
                    .get(key)
                    .map(|record| (key.clone(), record.clone()))
            })
            .collect()
    }
}
