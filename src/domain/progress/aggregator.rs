//! ProgressAggregator - bottom-up roll-up of release item metrics.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ProgressMetrics;
use crate::domain::foundation::Percentage;
use crate::domain::roadmap::{Cycle, InitiativeGroup};

/// A cycle with its overall metrics and time-window position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleOverview {
    #[serde(flatten)]
    pub cycle: Cycle,
    pub progress: ProgressMetrics,
    pub days_in_cycle: i64,
    pub days_elapsed: i64,
    pub time_elapsed: Percentage,
}

/// Computes progress metrics for the grouped tree.
pub struct ProgressAggregator;

impl ProgressAggregator {
    /// Attaches metrics to every roadmap item and initiative group.
    ///
    /// Roadmap item metrics come from their release items; initiative
    /// metrics are the combination of their roadmap items'.
    pub fn annotate(mut groups: Vec<InitiativeGroup>) -> Vec<InitiativeGroup> {
        for group in &mut groups {
            for item in &mut group.roadmap_items {
                item.progress = Some(ProgressMetrics::from_release_items(&item.release_items));
            }
            group.progress = Some(ProgressMetrics::combine(
                group.roadmap_items.iter().filter_map(|item| item.progress.as_ref()),
            ));
        }
        groups
    }

    /// Builds the cycle overview as seen at `now`.
    ///
    /// Day counts are zero when the cycle lacks a start or end date or the
    /// end precedes the start; elapsed time is clamped to the window.
    pub fn cycle_overview(
        cycle: &Cycle,
        groups: &[InitiativeGroup],
        now: DateTime<Utc>,
    ) -> CycleOverview {
        let progress = ProgressMetrics::from_release_items(
            groups
                .iter()
                .flat_map(|group| &group.roadmap_items)
                .flat_map(|item| &item.release_items),
        );

        let (days_in_cycle, days_elapsed, time_elapsed) = match (cycle.start, cycle.end) {
            (Some(start), Some(end)) if end > start => {
                let total = end - start;
                let elapsed = (now - start).clamp(chrono::Duration::zero(), total);
                (
                    total.num_days(),
                    elapsed.num_days(),
                    Percentage::from_ratio(
                        elapsed.num_seconds() as f64,
                        total.num_seconds() as f64,
                    ),
                )
            }
            _ => (0, 0, Percentage::ZERO),
        };

        CycleOverview {
            cycle: cycle.clone(),
            progress,
            days_in_cycle,
            days_elapsed,
            time_elapsed,
        }
    }
}

/// Sorts initiative groups by total weeks, largest first. Stable, so
/// groups with equal weeks keep their first-seen order.
pub fn sort_initiatives_by_weeks(groups: &mut [InitiativeGroup]) {
    groups.sort_by(|a, b| {
        total_weeks(b)
            .partial_cmp(&total_weeks(a))
            .unwrap_or(Ordering::Equal)
    });
}

fn total_weeks(group: &InitiativeGroup) -> f64 {
    match &group.progress {
        Some(progress) => progress.weeks,
        None => group.roadmap_items.iter().map(|item| item.total_effort()).sum(),
    }
}
