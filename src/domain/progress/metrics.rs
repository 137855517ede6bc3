//! ProgressMetrics value object.

use serde::Serialize;

use crate::domain::foundation::Percentage;
use crate::domain::roadmap::ReleaseItem;
use crate::domain::status::CanonicalStatus;

/// Weeks of effort per canonical status, with derived percentages.
///
/// `progress` is done weeks over committed weeks (todo + in progress +
/// done); `progress_with_in_progress` also counts in-progress weeks.
/// Not-to-do, cancelled and postponed work is reported but never committed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetrics {
    pub weeks: f64,
    pub weeks_done: f64,
    pub weeks_in_progress: f64,
    pub weeks_todo: f64,
    pub weeks_not_to_do: f64,
    pub weeks_cancelled: f64,
    pub weeks_postponed: f64,
    pub release_items_count: usize,
    pub release_items_done_count: usize,
    pub progress: Percentage,
    pub progress_with_in_progress: Percentage,
}

impl ProgressMetrics {
    /// Computes metrics over a set of release items.
    pub fn from_release_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ReleaseItem>,
    {
        let mut metrics = Self::default();
        for item in items {
            metrics.add(item.status, item.effort);
        }
        metrics.with_percentages()
    }

    /// Sums already-computed metrics and recomputes the percentages from the
    /// summed weeks.
    pub fn combine<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a ProgressMetrics>,
    {
        let mut total = Self::default();
        for part in parts {
            total.weeks += part.weeks;
            total.weeks_done += part.weeks_done;
            total.weeks_in_progress += part.weeks_in_progress;
            total.weeks_todo += part.weeks_todo;
            total.weeks_not_to_do += part.weeks_not_to_do;
            total.weeks_cancelled += part.weeks_cancelled;
            total.weeks_postponed += part.weeks_postponed;
            total.release_items_count += part.release_items_count;
            total.release_items_done_count += part.release_items_done_count;
        }
        total.with_percentages()
    }

    /// Weeks of todo, in-progress and done work.
    pub fn committed_weeks(&self) -> f64 {
        self.weeks_todo + self.weeks_in_progress + self.weeks_done
    }

    fn add(&mut self, status: CanonicalStatus, effort: f64) {
        self.weeks += effort;
        self.release_items_count += 1;
        match status {
            CanonicalStatus::Todo => self.weeks_todo += effort,
            CanonicalStatus::InProgress => self.weeks_in_progress += effort,
            CanonicalStatus::Done => {
                self.weeks_done += effort;
                self.release_items_done_count += 1;
            }
            CanonicalStatus::NotToDo => self.weeks_not_to_do += effort,
            CanonicalStatus::Cancelled => self.weeks_cancelled += effort,
            CanonicalStatus::Postponed => self.weeks_postponed += effort,
        }
    }

    fn with_percentages(mut self) -> Self {
        let committed = self.committed_weeks();
        self.progress = Percentage::from_ratio(self.weeks_done, committed);
        self.progress_with_in_progress =
            Percentage::from_ratio(self.weeks_done + self.weeks_in_progress, committed);
        self
    }
}
