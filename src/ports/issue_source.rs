use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::tracker::{RawIssue, RawRoadmapItemRecord, RawSprint};

/// Read-only port onto the issue tracker.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Lists every known cycle.
    async fn list_cycles(&self) -> Result<Vec<RawSprint>, IssueSourceError>;

    /// Fetches one cycle by id.
    async fn fetch_cycle(&self, cycle_id: &str) -> Result<RawSprint, IssueSourceError>;

    /// Fetches the issues planned into a cycle, in tracker order.
    async fn fetch_issues(&self, cycle_id: &str) -> Result<Vec<RawIssue>, IssueSourceError>;

    /// Fetches roadmap item records by issue key.
    ///
    /// Keys the tracker does not know are omitted from the result.
    async fn fetch_roadmap_items(
        &self,
        keys: &[String],
    ) -> Result<HashMap<String, RawRoadmapItemRecord>, IssueSourceError>;
}

/// Errors that can occur while reading from the tracker.
#[derive(Debug, thiserror::Error)]
pub enum IssueSourceError {
    #[error("Cycle not found: {0}")]
    CycleNotFound(String),

    #[error("Issue source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed tracker data: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for IssueSourceError {
    fn from(err: std::io::Error) -> Self {
        IssueSourceError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for IssueSourceError {
    fn from(err: serde_json::Error) -> Self {
        IssueSourceError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for testing
    struct MockIssueSource;

    #[async_trait]
    impl IssueSource for MockIssueSource {
        async fn list_cycles(&self) -> Result<Vec<RawSprint>, IssueSourceError> {
            Ok(vec![])
        }

        async fn fetch_cycle(&self, cycle_id: &str) -> Result<RawSprint, IssueSourceError> {
            Err(IssueSourceError::CycleNotFound(cycle_id.to_string()))
        }

        async fn fetch_issues(&self, _cycle_id: &str) -> Result<Vec<RawIssue>, IssueSourceError> {
            Ok(vec![])
        }

        async fn fetch_roadmap_items(
            &self,
            _keys: &[String],
        ) -> Result<HashMap<String, RawRoadmapItemRecord>, IssueSourceError> {
            Ok(HashMap::new())
        }
    }

    #[tokio::test]
    async fn source_is_object_safe() {
        let source: Box<dyn IssueSource> = Box::new(MockIssueSource);
        assert!(source.list_cycles().await.unwrap().is_empty());
        assert!(matches!(
            source.fetch_cycle("7").await,
            Err(IssueSourceError::CycleNotFound(id)) if id == "7"
        ));
    }

    #[test]
    fn error_conversion_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: IssueSourceError = io.into();
        assert!(matches!(error, IssueSourceError::Unavailable(_)));
    }

    #[test]
    fn error_conversion_from_json() {
        let json_error = serde_json::from_str::<RawSprint>("{").unwrap_err();
        let error: IssueSourceError = json_error.into();
        assert!(matches!(error, IssueSourceError::Malformed(_)));
    }

    #[test]
    fn error_messages() {
        let error = IssueSourceError::CycleNotFound("42".to_string());
        assert_eq!(error.to_string(), "Cycle not found: 42");

        let error = IssueSourceError::Unavailable("timeout".to_string());
        assert!(error.to_string().contains("unavailable"));
    }
}
