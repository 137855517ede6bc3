use crate::ports::IssueSourceError;

/// Errors returned by the report query handlers.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Cycle not found: {0}")]
    CycleNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Issue source error: {0}")]
    Upstream(String),
}

impl From<IssueSourceError> for ReportError {
    fn from(err: IssueSourceError) -> Self {
        match err {
            IssueSourceError::CycleNotFound(id) => ReportError::CycleNotFound(id),
            other => ReportError::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cycle_stays_not_found() {
        let error: ReportError = IssueSourceError::CycleNotFound("9".to_string()).into();
        assert!(matches!(error, ReportError::CycleNotFound(id) if id == "9"));
    }

    #[test]
    fn source_failures_become_upstream() {
        let error: ReportError = IssueSourceError::Malformed("bad json".to_string()).into();
        match error {
            ReportError::Upstream(msg) => assert!(msg.contains("bad json")),
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }
}
