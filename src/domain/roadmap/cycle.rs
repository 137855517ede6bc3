//! Cycle - a bounded delivery window built from a tracker sprint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::{parse_tracker_date, CycleState};
use crate::domain::status::CycleWindow;
use crate::domain::tracker::RawSprint;

/// A delivery cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub id: String,
    pub name: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Completion date when the sprint has been closed, otherwise the end date.
    pub delivery: Option<DateTime<Utc>>,
    pub state: CycleState,
}

impl Cycle {
    /// Builds a cycle from a raw sprint record.
    ///
    /// Unparseable dates become None; unknown states become `Future`.
    pub fn from_raw(sprint: &RawSprint) -> Self {
        let start = sprint.start_date.as_deref().and_then(parse_tracker_date);
        let end = sprint.end_date.as_deref().and_then(parse_tracker_date);
        let delivery = sprint
            .complete_date
            .as_deref()
            .and_then(parse_tracker_date)
            .or(end);

        let state = match sprint.state.as_deref() {
            Some(raw) => CycleState::from_raw(raw).unwrap_or_else(|| {
                tracing::warn!(sprint_id = %sprint.id, state = raw, "Unknown sprint state, treating as future");
                CycleState::Future
            }),
            None => CycleState::Future,
        };

        Self {
            id: sprint.id.clone(),
            name: sprint.name.clone(),
            start,
            end,
            delivery,
            state,
        }
    }

    /// Returns the start/end window used for status overrides.
    pub fn window(&self) -> CycleWindow {
        CycleWindow::new(self.start, self.end)
    }
}
