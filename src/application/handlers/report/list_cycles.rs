//! ListCyclesHandler - Query handler listing the cycles a report can be
//! built for.

use std::sync::Arc;

use crate::domain::foundation::CycleState;
use crate::domain::roadmap::Cycle;
use crate::ports::IssueSource;

use super::ReportError;

/// Query to list cycles.
#[derive(Debug, Clone, Default)]
pub struct ListCyclesQuery {
    /// Restrict the list to one state.
    pub state: Option<CycleState>,
}

/// Result of a successful cycle list query.
pub type ListCyclesResult = Vec<Cycle>;

/// Handler for listing cycles.
///
/// Cycles come back in source order.
pub struct ListCyclesHandler {
    source: Arc<dyn IssueSource>,
}

impl ListCyclesHandler {
    pub fn new(source: Arc<dyn IssueSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: ListCyclesQuery) -> Result<ListCyclesResult, ReportError> {
        let sprints = self.source.list_cycles().await?;
        Ok(sprints
            .iter()
            .map(Cycle::from_raw)
            .filter(|cycle| query.state.map_or(true, |state| cycle.state == state))
            .collect())
    }
}
