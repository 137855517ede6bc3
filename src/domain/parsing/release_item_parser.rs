//! ReleaseItemParser - builds one release item from one tracker issue.

use crate::domain::engine_config::EngineConfig;
use crate::domain::labels::{
    extract_labels_with_prefix, translate_label_without_fallback, LabelType,
};
use crate::domain::roadmap::{Cycle, Person, ReleaseItem, ValidationItem, ValidationKind};
use crate::domain::stage::{is_external_stage, match_stage};
use crate::domain::status::{resolve_status, CycleWindow};
use crate::domain::tracker::RawIssue;

use super::url::{browse_url, tracker_base_url};

/// Parses issues of a single cycle into release items.
///
/// Constructed once per (cycle, config) pair; `parse` is pure and may be
/// called for any number of issues.
pub struct ReleaseItemParser<'a> {
    cycle: &'a Cycle,
    window: CycleWindow,
    config: &'a EngineConfig,
    base_url: String,
}

impl<'a> ReleaseItemParser<'a> {
    pub fn new(cycle: &'a Cycle, config: &'a EngineConfig) -> Self {
        Self {
            cycle,
            window: cycle.window(),
            config,
            base_url: tracker_base_url(config.tracker_host.as_deref()),
        }
    }

    /// Builds the release item for `issue`, recording data-quality findings
    /// in a fixed order: area, team, team translation, effort, assignee,
    /// parent.
    pub fn parse(&self, issue: &RawIssue) -> ReleaseItem {
        let mut validations = Vec::new();
        let labels = &issue.fields.labels;

        let area_ids = extract_labels_with_prefix(labels, LabelType::Area.prefix());
        if area_ids.is_empty() {
            validations.push(ValidationItem::new(ValidationKind::MissingArea));
        }

        let team_labels = extract_labels_with_prefix(labels, LabelType::Team.prefix());
        if team_labels.is_empty() {
            validations.push(ValidationItem::new(ValidationKind::MissingTeam));
        }
        let teams: Vec<String> = team_labels
            .into_iter()
            .map(|team| {
                match translate_label_without_fallback(LabelType::Team, &team, self.config) {
                    Some(name) => name,
                    None => {
                        validations.push(ValidationItem::with_detail(
                            ValidationKind::MissingTeamTranslation,
                            team.as_str(),
                        ));
                        team
                    }
                }
            })
            .collect();

        // Negative estimates count as zero weeks.
        let effort = match issue.numeric_field(&self.config.effort_field) {
            Some(effort) if effort < 0.0 => {
                validations.push(ValidationItem::new(ValidationKind::NegativeEffort));
                0.0
            }
            Some(effort) => {
                if !is_half_week_multiple(effort) {
                    validations.push(ValidationItem::new(ValidationKind::EffortTooGranular));
                }
                effort
            }
            None => {
                validations.push(ValidationItem::new(ValidationKind::MissingEffort));
                0.0
            }
        };

        let assignee = issue
            .fields
            .assignee
            .as_ref()
            .or(issue.fields.reporter.as_ref())
            .map(Person::from);
        if assignee.is_none() {
            validations.push(ValidationItem::new(ValidationKind::MissingAssignee));
        }

        let roadmap_item_id = issue.parent_key().map(str::to_string);
        if roadmap_item_id.is_none() {
            validations.push(ValidationItem::new(ValidationKind::MissingParent));
        }

        let title = issue.summary();
        let stage_match = match_stage(title, self.config);
        let is_external = is_external_stage(&stage_match.stage, self.config);

        ReleaseItem {
            id: issue.key.clone(),
            ticket_id: issue.key.clone(),
            name: stage_match.strip_from(title),
            url: browse_url(&self.base_url, &issue.key),
            effort,
            area_ids,
            teams,
            status: resolve_status(&issue.fields, &self.window, self.config),
            stage: stage_match.stage,
            assignee,
            is_external,
            validations,
            roadmap_item_id,
            cycle_id: self.cycle.id.clone(),
        }
    }
}

fn is_half_week_multiple(effort: f64) -> bool {
    let doubled = effort * 2.0;
    (doubled - doubled.round()).abs() < 1e-9
}
