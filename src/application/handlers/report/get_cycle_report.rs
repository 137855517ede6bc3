//! GetCycleReportHandler - Query handler building the report for one cycle.
//!
//! Fetches the cycle, its issues and the roadmap item records they point
//! at, then runs the domain pipeline over the resulting snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::engine_config::EngineConfig;
use crate::domain::report::{build_cycle_report, CycleReport, CycleSnapshot, InitiativeOrder};
use crate::domain::tracker::RawIssue;
use crate::ports::IssueSource;

use super::ReportError;

/// Query to build the report for one cycle.
#[derive(Debug, Clone)]
pub struct GetCycleReportQuery {
    /// Tracker id of the cycle.
    pub cycle_id: String,
    /// Ordering applied to initiative groups.
    pub order: InitiativeOrder,
}

/// Result of a successful report query.
pub type GetCycleReportResult = CycleReport;

/// Handler for building cycle reports.
pub struct GetCycleReportHandler {
    source: Arc<dyn IssueSource>,
    config: Arc<EngineConfig>,
}

impl GetCycleReportHandler {
    pub fn new(source: Arc<dyn IssueSource>, config: Arc<EngineConfig>) -> Self {
        Self { source, config }
    }

    pub async fn handle(
        &self,
        query: GetCycleReportQuery,
    ) -> Result<GetCycleReportResult, ReportError> {
        self.handle_at(query, Utc::now()).await
    }

    /// Builds the report as seen at `now`.
    pub async fn handle_at(
        &self,
        query: GetCycleReportQuery,
        now: DateTime<Utc>,
    ) -> Result<GetCycleReportResult, ReportError> {
        let cycle_id = query.cycle_id.trim();
        if cycle_id.is_empty() {
            return Err(ReportError::InvalidInput("cycle id is empty".to_string()));
        }

        let sprint = self.source.fetch_cycle(cycle_id).await?;
        let issues = self.source.fetch_issues(cycle_id).await?;
        let parent_keys = parent_keys(&issues);
        let roadmap_items = if parent_keys.is_empty() {
            Default::default()
        } else {
            self.source.fetch_roadmap_items(&parent_keys).await?
        };

        let missing = parent_keys
            .iter()
            .filter(|key| !roadmap_items.contains_key(*key))
            .count();
        if missing > 0 {
            tracing::warn!(cycle_id, missing, "Roadmap item records missing from source");
        }

        let snapshot = CycleSnapshot {
            sprint,
            issues,
            roadmap_items,
        };
        let report = build_cycle_report(&snapshot, &self.config, query.order, now);

        tracing::info!(
            cycle_id,
            issues = snapshot.issues.len(),
            initiatives = report.initiatives.len(),
            "Built cycle report"
        );

        Ok(report)
    }
}

/// Distinct parent keys in first-seen order.
fn parent_keys(issues: &[RawIssue]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in issues.iter().filter_map(RawIssue::parent_key) {
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}
