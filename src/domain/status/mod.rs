//! Status resolution.
//!
//! Maps the tracker's raw status id to a canonical status, and marks items
//! whose own sprint lies outside the viewed cycle as postponed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::engine_config::EngineConfig;
use crate::domain::foundation::parse_tracker_date;
use crate::domain::tracker::RawIssueFields;

/// Canonical delivery status of a release item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    NotToDo,
    Cancelled,
    Postponed,
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CanonicalStatus::Todo => "todo",
            CanonicalStatus::InProgress => "inProgress",
            CanonicalStatus::Done => "done",
            CanonicalStatus::NotToDo => "notToDo",
            CanonicalStatus::Cancelled => "cancelled",
            CanonicalStatus::Postponed => "postponed",
        };
        write!(f, "{}", s)
    }
}

/// Start/end bounds of the cycle being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl CycleWindow {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Returns Some(true) when `instant` lies outside the window, Some(false)
    /// when inside, and None when the window is not fully bounded.
    pub fn excludes(&self, instant: DateTime<Utc>) -> Option<bool> {
        let (start, end) = (self.start?, self.end?);
        Some(instant < start || instant > end)
    }
}

/// Resolves the canonical status of an issue viewed within `window`.
pub fn resolve_status(
    fields: &RawIssueFields,
    window: &CycleWindow,
    config: &EngineConfig,
) -> CanonicalStatus {
    let mapped = fields
        .status
        .as_ref()
        .and_then(|status| config.status_map.get(&status.id))
        .copied()
        .unwrap_or(config.default_status);

    let sprint_start = fields
        .sprint
        .as_ref()
        .and_then(|sprint| sprint.start_date.as_deref())
        .and_then(parse_tracker_date);

    match sprint_start.and_then(|start| window.excludes(start)) {
        Some(true) => CanonicalStatus::Postponed,
        _ => mapped,
    }
}
