//! RoadmapItemParser - builds a roadmap item from its tracker record and
//! its already-parsed release items.

use std::collections::HashMap;

use crate::domain::engine_config::EngineConfig;
use crate::domain::labels::{
    extract_labels_with_prefix, first_label_with_prefix, translate_label, LabelType,
};
use crate::domain::roadmap::{
    Initiative, ReleaseItem, ResolvedArea, ResolvedTheme, RoadmapItem, UNKNOWN_TEAM,
};
use crate::domain::tracker::RawRoadmapItemRecord;

use super::url::{browse_url, tracker_base_url};

/// Theme label value marking a roadmap item as having no real initiative.
const VIRTUAL_THEME: &str = "virtual";

/// Parses roadmap items against the records fetched for a cycle.
pub struct RoadmapItemParser<'a> {
    records: &'a HashMap<String, RawRoadmapItemRecord>,
    config: &'a EngineConfig,
    base_url: String,
}

impl<'a> RoadmapItemParser<'a> {
    pub fn new(
        records: &'a HashMap<String, RawRoadmapItemRecord>,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            records,
            config,
            base_url: tracker_base_url(config.tracker_host.as_deref()),
        }
    }

    /// Builds the roadmap item `project_id`, owning `release_items` as given.
    ///
    /// Unknown ids (and the None bucket of parentless items) produce a
    /// placeholder item rather than being dropped.
    pub fn parse(&self, project_id: Option<&str>, release_items: Vec<ReleaseItem>) -> RoadmapItem {
        let url = project_id.map(|key| browse_url(&self.base_url, key));

        let Some(record) = project_id.and_then(|key| self.records.get(key)) else {
            if let Some(key) = project_id {
                tracing::debug!(roadmap_item = key, "Roadmap item record not found");
            }
            return RoadmapItem {
                id: project_id.map(str::to_string),
                name: String::new(),
                url,
                area: ResolvedArea::Unknown,
                theme: ResolvedTheme::None,
                initiative_id: None,
                initiative: None,
                owning_team: UNKNOWN_TEAM.to_string(),
                is_external: false,
                release_items,
                validations: Vec::new(),
                progress: None,
            };
        };

        let labels = &record.labels;
        let theme_labels = extract_labels_with_prefix(labels, LabelType::Theme.prefix());
        let is_virtual = theme_labels.iter().any(|theme| theme == VIRTUAL_THEME);

        let theme = match theme_labels.first() {
            Some(value) => ResolvedTheme::Named(translate_label(LabelType::Theme, value, self.config)),
            None => ResolvedTheme::None,
        };

        let initiative = if is_virtual {
            Some(Initiative::virtual_initiative())
        } else {
            first_label_with_prefix(labels, LabelType::Initiative.prefix()).map(|value| {
                let name = translate_label(LabelType::Initiative, &value, self.config);
                Initiative::new(value, name)
            })
        };

        let area_names = extract_labels_with_prefix(labels, LabelType::Area.prefix())
            .iter()
            .map(|value| translate_label(LabelType::Area, value, self.config))
            .collect();

        let owning_team = release_items
            .iter()
            .find_map(|item| item.teams.first().cloned())
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

        RoadmapItem {
            id: project_id.map(str::to_string),
            name: record.summary.clone(),
            url,
            area: ResolvedArea::from_names(area_names),
            theme,
            initiative_id: initiative.as_ref().map(|i| i.id.clone()),
            initiative,
            owning_team,
            is_external: false,
            release_items,
            validations: Vec::new(),
            progress: None,
        }
    }
}
