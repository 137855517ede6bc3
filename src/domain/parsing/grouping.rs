//! Issue-to-initiative grouping.

use std::collections::HashMap;

use crate::domain::engine_config::EngineConfig;
use crate::domain::roadmap::{Cycle, InitiativeGroup, RoadmapItem};
use crate::domain::tracker::{RawIssue, RawRoadmapItemRecord};

use super::{ReleaseItemParser, RoadmapItemParser};

/// Groups a cycle's issues into initiative -> roadmap item -> release item.
///
/// Issues are partitioned by parent key in first-seen order (parentless
/// issues share one bucket), each partition becomes a roadmap item whose
/// release items keep input order, and roadmap items are grouped by
/// resolved initiative id, again in first-seen order.
pub fn parse_jira_issues(
    issues: &[RawIssue],
    roadmap_items: &HashMap<String, RawRoadmapItemRecord>,
    cycle: &Cycle,
    config: &EngineConfig,
) -> Vec<InitiativeGroup> {
    if issues.is_empty() {
        return Vec::new();
    }

    let release_parser = ReleaseItemParser::new(cycle, config);
    let roadmap_parser = RoadmapItemParser::new(roadmap_items, config);

    let mut partitions: Vec<(Option<&str>, Vec<&RawIssue>)> = Vec::new();
    let mut partition_index: HashMap<Option<&str>, usize> = HashMap::new();
    for issue in issues {
        let key = issue.parent_key();
        let index = *partition_index.entry(key).or_insert_with(|| {
            partitions.push((key, Vec::new()));
            partitions.len() - 1
        });
        partitions[index].1.push(issue);
    }

    let parsed: Vec<RoadmapItem> = partitions
        .into_iter()
        .map(|(key, issues)| {
            let release_items = issues
                .into_iter()
                .map(|issue| release_parser.parse(issue))
                .collect();
            roadmap_parser.parse(key, release_items)
        })
        .collect();

    tracing::debug!(
        cycle_id = %cycle.id,
        issues = issues.len(),
        roadmap_items = parsed.len(),
        "Parsed cycle issues"
    );

    group_by_initiative(parsed)
}

fn group_by_initiative(items: Vec<RoadmapItem>) -> Vec<InitiativeGroup> {
    let mut groups: Vec<InitiativeGroup> = Vec::new();
    let mut group_index: HashMap<Option<String>, usize> = HashMap::new();

    for item in items {
        let key = item.initiative_id.clone();
        let index = *group_index.entry(key).or_insert_with(|| {
            groups.push(InitiativeGroup::new(item.initiative.clone()));
            groups.len() - 1
        });
        groups[index].roadmap_items.push(item);
    }

    groups
}
