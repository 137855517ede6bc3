use serde::Serialize;

use super::RoadmapItem;
use crate::domain::progress::ProgressMetrics;

/// Id (and name) of the virtual initiative.
pub const VIRTUAL_INITIATIVE_ID: &str = "uncategorized";

/// A named grouping of roadmap items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Initiative {
    pub id: String,
    pub name: String,
}

impl Initiative {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// The sentinel initiative for roadmap items marked `theme:virtual`.
    pub fn virtual_initiative() -> Self {
        Self::new(VIRTUAL_INITIATIVE_ID, VIRTUAL_INITIATIVE_ID)
    }
}

/// One initiative and the roadmap items grouped under it.
///
/// `id` and `initiative` are None for roadmap items without any initiative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiativeGroup {
    pub id: Option<String>,
    pub initiative: Option<Initiative>,
    pub roadmap_items: Vec<RoadmapItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressMetrics>,
}

impl InitiativeGroup {
    pub fn new(initiative: Option<Initiative>) -> Self {
        Self {
            id: initiative.as_ref().map(|i| i.id.clone()),
            initiative,
            roadmap_items: Vec::new(),
            progress: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_initiative_uses_sentinel() {
        let initiative = Initiative::virtual_initiative();
        assert_eq!(initiative.id, "uncategorized");
        assert_eq!(initiative.name, "uncategorized");
    }

    #[test]
    fn group_id_follows_initiative() {
        let group = InitiativeGroup::new(Some(Initiative::new("growth", "Growth")));
        assert_eq!(group.id.as_deref(), Some("growth"));

        let group = InitiativeGroup::new(None);
        assert!(group.id.is_none());
        assert!(group.roadmap_items.is_empty());
    }

    #[test]
    fn serializes_without_progress_until_aggregated() {
        let json = serde_json::to_value(InitiativeGroup::new(None)).unwrap();
        assert!(json["id"].is_null());
        assert!(json["roadmapItems"].as_array().unwrap().is_empty());
        assert!(json.get("progress").is_none());
    }
}
