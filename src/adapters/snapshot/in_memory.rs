//! In-memory issue source.
//!
//! Serves a fixed `SnapshotDocument`. Used by tests and by callers that
//! already hold tracker data in memory.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::tracker::{RawIssue, RawRoadmapItemRecord, RawSprint};
use crate::ports::{IssueSource, IssueSourceError};

use super::{SnapshotCycle, SnapshotDocument};

/// Issue source over an in-memory snapshot.
///
/// # Example
///
/// ```ignore
/// let source = InMemoryIssueSource::new()
///     .with_cycle(sprint, issues)
///     .with_roadmap_item("ROADMAP-1", record);
/// let cycles = source.list_cycles().await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueSource {
    document: SnapshotDocument,
}

impl InMemoryIssueSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cycle with its issues.
    pub fn with_cycle(mut self, sprint: RawSprint, issues: Vec<RawIssue>) -> Self {
        self.document.cycles.push(SnapshotCycle { sprint, issues });
        self
    }

    /// Adds a roadmap item record.
    pub fn with_roadmap_item(mut self, key: impl Into<String>, record: RawRoadmapItemRecord) -> Self {
        self.document.roadmap_items.insert(key.into(), record);
        self
    }
}

#[async_trait]
impl IssueSource for InMemoryIssueSource {
    async fn list_cycles(&self) -> Result<Vec<RawSprint>, IssueSourceError> {
        Ok(self.document.sprints())
    }

    async fn fetch_cycle(&self, cycle_id: &str) -> Result<RawSprint, IssueSourceError> {
        Ok(self.document.cycle(cycle_id)?.sprint.clone())
    }

    async fn fetch_issues(&self, cycle_id: &str) -> Result<Vec<RawIssue>, IssueSourceError> {
        Ok(self.document.cycle(cycle_id)?.issues.clone())
    }

    async fn fetch_roadmap_items(
        &self,
        keys: &[String],
    ) -> Result<HashMap<String, RawRoadmapItemRecord>, IssueSourceError> {
        Ok(self.document.roadmap_items_for(keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint(id: &str) -> RawSprint {
        RawSprint {
            id: id.to_string(),
            name: format!("Sprint {id}"),
            ..RawSprint::default()
        }
    }

    fn source() -> InMemoryIssueSource {
        InMemoryIssueSource::new()
            .with_cycle(sprint("1"), vec![RawIssue::new("REL-1", "First")])
            .with_cycle(sprint("2"), vec![])
            .with_roadmap_item(
                "ROADMAP-1",
                RawRoadmapItemRecord {
                    summary: "Payments".to_string(),
                    labels: vec![],
                },
            )
    }

    #[tokio::test]
    async fn lists_cycles_in_insertion_order() {
        let cycles = source().list_cycles().await.unwrap();
        let ids: Vec<_> = cycles.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn fetches_cycle_and_issues() {
        let source = source();
        assert_eq!(source.fetch_cycle("2").await.unwrap().name, "Sprint 2");
        let issues = source.fetch_issues("1").await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "REL-1");
    }

    #[tokio::test]
    async fn unknown_cycle_is_not_found() {
        let source = source();
        assert!(matches!(
            source.fetch_cycle("9").await,
            Err(IssueSourceError::CycleNotFound(_))
        ));
        assert!(matches!(
            source.fetch_issues("9").await,
            Err(IssueSourceError::CycleNotFound(_))
        ));
    }

    #[tokio::test]
    async fn fetches_only_known_roadmap_items() {
        let records = source()
            .fetch_roadmap_items(&["ROADMAP-1".to_string(), "ROADMAP-2".to_string()])
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records["ROADMAP-1"].summary, "Payments");
    }
}
