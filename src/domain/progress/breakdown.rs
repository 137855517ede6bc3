//! Progress broken down by team and by area.

use std::collections::HashMap;

use serde::Serialize;

use super::ProgressMetrics;
use crate::domain::engine_config::EngineConfig;
use crate::domain::labels::{translate_label, LabelType};
use crate::domain::roadmap::{InitiativeGroup, ReleaseItem};

/// Bucket for release items without the classifying label.
const UNKNOWN_BUCKET: &str = "unknown";

/// Metrics for one team or area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBreakdown {
    pub key: String,
    pub name: String,
    pub progress: ProgressMetrics,
}

impl ProgressBreakdown {
    /// One entry per team name, in first-seen order.
    ///
    /// Team names on release items are already translated.
    pub fn by_team(groups: &[InitiativeGroup]) -> Vec<Self> {
        breakdown(groups, |item| item.teams.clone(), |team| team.to_string())
    }

    /// One entry per area id, in first-seen order, named via the area
    /// dictionary.
    pub fn by_area(groups: &[InitiativeGroup], config: &EngineConfig) -> Vec<Self> {
        breakdown(
            groups,
            |item| item.area_ids.clone(),
            |area| translate_label(LabelType::Area, area, config),
        )
    }
}

fn breakdown<K, N>(groups: &[InitiativeGroup], keys_of: K, name_of: N) -> Vec<ProgressBreakdown>
where
    K: Fn(&ReleaseItem) -> Vec<String>,
    N: Fn(&str) -> String,
{
    let mut buckets: Vec<(String, Vec<&ReleaseItem>)> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();

    let release_items = groups
        .iter()
        .flat_map(|group| &group.roadmap_items)
        .flat_map(|item| &item.release_items);

    for item in release_items {
        let mut keys = keys_of(item);
        if keys.is_empty() {
            keys.push(UNKNOWN_BUCKET.to_string());
        }
        let mut seen: Vec<&str> = Vec::with_capacity(keys.len());
        for key in &keys {
            if seen.contains(&key.as_str()) {
                continue;
            }
            seen.push(key.as_str());
            let index = *bucket_index.entry(key.clone()).or_insert_with(|| {
                buckets.push((key.clone(), Vec::new()));
                buckets.len() - 1
            });
            buckets[index].1.push(item);
        }
    }

    buckets
        .into_iter()
        .map(|(key, items)| ProgressBreakdown {
            name: if key == UNKNOWN_BUCKET {
                key.clone()
            } else {
                name_of(&key)
            },
            progress: ProgressMetrics::from_release_items(items),
            key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parsing::parse_jira_issues;
    use crate::domain::roadmap::Cycle;
    use crate::domain::tracker::{RawIssue, RawParent, RawSprint};
    use serde_json::json;

    fn groups() -> Vec<InitiativeGroup> {
        let cycle = Cycle::from_raw(&RawSprint {
            id: "1".to_string(),
            ..RawSprint::default()
        });
        let issues: Vec<RawIssue> = [
            ("I-1", "team:core,area:pay", 1.0),
            ("I-2", "team:web,team:core,area:pay,area:search", 2.0),
            ("I-3", "", 0.5),
            ("I-4", "team:core,team:core", 1.0),
        ]
        .iter()
        .map(|(key, labels, effort)| {
            let mut issue = RawIssue::new(*key, "Work");
            issue.fields.parent = Some(RawParent {
                key: "R-1".to_string(),
            });
            issue.fields.labels = labels
                .split(',')
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect();
            issue.fields.custom.insert("effort".to_string(), json!(effort));
            issue
        })
        .collect();
        parse_jira_issues(&issues, &HashMap::new(), &cycle, &config())
    }

    fn config() -> EngineConfig {
        EngineConfig::default().with_translation(LabelType::Area, "pay", "Payments")
    }

    #[test]
    fn team_breakdown_in_first_seen_order() {
        let teams = ProgressBreakdown::by_team(&groups());
        let keys: Vec<_> = teams.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["core", "web", "unknown"]);

        assert_eq!(teams[0].progress.weeks, 4.0);
        assert_eq!(teams[0].progress.release_items_count, 3);
        assert_eq!(teams[1].progress.weeks, 2.0);
        assert_eq!(teams[2].progress.weeks, 0.5);
    }

    #[test]
    fn area_breakdown_translates_names() {
        let areas = ProgressBreakdown::by_area(&groups(), &config());
        let names: Vec<_> = areas.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Payments", "search", "unknown"]);
        assert_eq!(areas[0].key, "pay");
        assert_eq!(areas[0].progress.weeks, 3.0);
        assert_eq!(areas[2].progress.weeks, 1.5);
    }

    #[test]
    fn empty_tree_has_no_buckets() {
        assert!(ProgressBreakdown::by_team(&[]).is_empty());
    }
}
