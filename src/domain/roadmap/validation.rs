//! Data-quality findings.
//!
//! Findings never stop processing; they are accumulated in the order they
//! were encountered and shipped alongside the parsed entity.

use serde::Serialize;

/// Kind of data-quality finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationKind {
    MissingArea,
    MissingTeam,
    MissingTeamTranslation,
    MissingEffort,
    NegativeEffort,
    EffortTooGranular,
    MissingAssignee,
    MissingParent,
}

impl ValidationKind {
    /// Human-readable name of the finding.
    pub fn label(&self) -> &'static str {
        match self {
            ValidationKind::MissingArea => "Missing area label",
            ValidationKind::MissingTeam => "Missing team label",
            ValidationKind::MissingTeamTranslation => "Missing translation for team",
            ValidationKind::MissingEffort => "Missing effort estimate",
            ValidationKind::NegativeEffort => "Effort estimate is negative",
            ValidationKind::EffortTooGranular => "Effort estimate too granular",
            ValidationKind::MissingAssignee => "Missing assignee",
            ValidationKind::MissingParent => "No parent project ID",
        }
    }
}

/// A finding attached to a release item or roadmap item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationItem {
    pub kind: ValidationKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ValidationItem {
    pub fn new(kind: ValidationKind) -> Self {
        Self {
            kind,
            name: kind.label().to_string(),
            detail: None,
        }
    }

    /// A finding about a specific label value; the value is appended to the name.
    pub fn with_detail(kind: ValidationKind, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self {
            kind,
            name: format!("{}: {}", kind.label(), detail),
            detail: Some(detail),
        }
    }
}
