//! JSON snapshot file issue source.
//!
//! Reads the snapshot file on every call, so a refreshed capture is
//! picked up without a restart.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::tracker::{RawIssue, RawRoadmapItemRecord, RawSprint};
use crate::ports::{IssueSource, IssueSourceError};

use super::SnapshotDocument;

/// Issue source backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the snapshot file.
    pub async fn load(&self) -> Result<SnapshotDocument, IssueSourceError> {
        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            IssueSourceError::Unavailable(format!(
                "Failed to read snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let document = SnapshotDocument::from_json_str(&text)?;
        tracing::debug!(
            path = %self.path.display(),
            cycles = document.cycles.len(),
            roadmap_items = document.roadmap_items.len(),
            "Loaded snapshot"
        );
        Ok(document)
    }
}

#[async_trait]
impl IssueSource for JsonSnapshotSource {
    async fn list_cycles(&self) -> Result<Vec<RawSprint>, IssueSourceError> {
        Ok(self.load().await?.sprints())
    }

    async fn fetch_cycle(&self, cycle_id: &str) -> Result<RawSprint, IssueSourceError> {
        let document = self.load().await?;
        Ok(document.cycle(cycle_id)?.sprint.clone())
    }

    async fn fetch_issues(&self, cycle_id: &str) -> Result<Vec<RawIssue>, IssueSourceError> {
        let document = self.load().await?;
        Ok(document.cycle(cycle_id)?.issues.clone())
    }

    async fn fetch_roadmap_items(
        &self,
        keys: &[String],
    ) -> Result<HashMap<String, RawRoadmapItemRecord>, IssueSourceError> {
        Ok(self.load().await?.roadmap_items_for(keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = r#"{
        "cycles": [
            { "sprint": { "id": "7", "name": "Autumn", "state": "closed" },
              "issues": [ { "key": "REL-1", "fields": { "summary": "Ship it",
                            "parent": { "key": "ROADMAP-1" } } } ] }
        ],
        "roadmapItems": { "ROADMAP-1": { "summary": "Shipping", "labels": [] } }
    }"#;

    fn snapshot_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn serves_cycles_from_file() {
        let file = snapshot_file(SNAPSHOT);
        let source = JsonSnapshotSource::new(file.path());

        let cycles = source.list_cycles().await.unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].name, "Autumn");

        let issues = source.fetch_issues("7").await.unwrap();
        assert_eq!(issues[0].key, "REL-1");

        let records = source
            .fetch_roadmap_items(&["ROADMAP-1".to_string()])
            .await
            .unwrap();
        assert_eq!(records["ROADMAP-1"].summary, "Shipping");
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = JsonSnapshotSource::new(dir.path().join("absent.json"));
        assert!(matches!(
            source.list_cycles().await,
            Err(IssueSourceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed() {
        let file = snapshot_file("not json");
        let source = JsonSnapshotSource::new(file.path());
        assert!(matches!(
            source.fetch_cycle("7").await,
            Err(IssueSourceError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn picks_up_rewritten_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("snapshot.json");
        std::fs::write(&path, "{}").unwrap();
        let source = JsonSnapshotSource::new(&path);
        assert!(source.list_cycles().await.unwrap().is_empty());

        std::fs::write(&path, SNAPSHOT).unwrap();
        assert_eq!(source.list_cycles().await.unwrap().len(), 1);
    }
}
