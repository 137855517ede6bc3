//! Cycle report assembly.
//!
//! Runs the full pipeline over one fetched snapshot: grouping, progress
//! annotation, cycle overview and the team/area breakdowns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::engine_config::EngineConfig;
use crate::domain::parsing::parse_jira_issues;
use crate::domain::progress::{
    sort_initiatives_by_weeks, CycleOverview, ProgressAggregator, ProgressBreakdown,
};
use crate::domain::roadmap::{Cycle, InitiativeGroup};
use crate::domain::tracker::{RawIssue, RawRoadmapItemRecord, RawSprint};

/// Everything fetched from the tracker for one cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleSnapshot {
    pub sprint: RawSprint,
    pub issues: Vec<RawIssue>,
    pub roadmap_items: HashMap<String, RawRoadmapItemRecord>,
}

/// Ordering applied to initiative groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitiativeOrder {
    /// First-seen order from the issue list
    #[default]
    FirstSeen,
    /// Largest total weeks first
    ByWeeks,
}

/// The serialized dashboard payload for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub cycle: CycleOverview,
    pub initiatives: Vec<InitiativeGroup>,
    pub teams: Vec<ProgressBreakdown>,
    pub areas: Vec<ProgressBreakdown>,
}

/// Builds the report for `snapshot` as seen at `now`.
pub fn build_cycle_report(
    snapshot: &CycleSnapshot,
    config: &EngineConfig,
    order: InitiativeOrder,
    now: DateTime<Utc>,
) -> CycleReport {
    let cycle = Cycle::from_raw(&snapshot.sprint);
    let groups = parse_jira_issues(&snapshot.issues, &snapshot.roadmap_items, &cycle, config);
    let mut initiatives = ProgressAggregator::annotate(groups);
    if order == InitiativeOrder::ByWeeks {
        sort_initiatives_by_weeks(&mut initiatives);
    }

    CycleReport {
        cycle: ProgressAggregator::cycle_overview(&cycle, &initiatives, now),
        teams: ProgressBreakdown::by_team(&initiatives),
        areas: ProgressBreakdown::by_area(&initiatives, config),
        initiatives,
    }
}
