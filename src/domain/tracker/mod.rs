//! Raw record shapes supplied by the issue tracker.
//!
//! These mirror the tracker's JSON payloads closely and are deserialized
//! leniently: missing collections default to empty, ids may arrive as
//! numbers or strings, and unknown issue fields are kept so custom fields
//! (such as the effort estimate) can be read by name.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One issue as returned by the tracker search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: RawIssueFields,
}

impl RawIssue {
    /// Creates an issue with the given key and summary.
    pub fn new(key: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: RawIssueFields {
                summary: Some(summary.into()),
                ..RawIssueFields::default()
            },
        }
    }

    /// Returns the parent issue key, if the issue has a parent.
    pub fn parent_key(&self) -> Option<&str> {
        self.fields.parent.as_ref().map(|p| p.key.as_str())
    }

    /// Returns the summary, or `""` when the tracker sent none.
    pub fn summary(&self) -> &str {
        self.fields.summary.as_deref().unwrap_or("")
    }

    /// Reads a numeric custom field by name.
    ///
    /// Numeric strings are accepted; anything else is treated as absent.
    pub fn numeric_field(&self, name: &str) -> Option<f64> {
        match self.fields.custom.get(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

/// The `fields` object of a tracker issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub parent: Option<RawParent>,
    #[serde(default)]
    pub assignee: Option<RawUser>,
    #[serde(default)]
    pub reporter: Option<RawUser>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub sprint: Option<RawSprint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub closed_sprints: Vec<RawSprint>,
    /// Every other field, including custom fields.
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Issue status reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatus {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Parent issue reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawParent {
    pub key: String,
}

/// Tracker user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub account_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Sprint record, used both for the viewed cycle and for an issue's own
/// sprint reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSprint {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub complete_date: Option<String>,
}

/// Roadmap item record (the parent "project" issue of release items).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoadmapItemRecord {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
