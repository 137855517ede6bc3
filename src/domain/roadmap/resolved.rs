//! Label-derived classifications of a roadmap item.
//!
//! Internally these are tagged unions; on the wire they keep the object
//! shapes the dashboard reads: `{}` for an unknown roadmap item,
//! `{"name": []}` for a known item without area labels, and
//! `{"name": "..."}` otherwise.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Resolved area of a roadmap item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolvedArea {
    /// The roadmap item record itself is unknown.
    #[default]
    Unknown,
    /// The record exists but carries no `area:` labels.
    Unlabelled,
    /// Translated area names joined with `", "`.
    Named(String),
}

impl ResolvedArea {
    /// Builds an area from translated names.
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            ResolvedArea::Unlabelled
        } else {
            ResolvedArea::Named(names.join(", "))
        }
    }
}

impl Serialize for ResolvedArea {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedArea::Unknown => serializer.serialize_map(Some(0))?.end(),
            ResolvedArea::Unlabelled => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("name", &[] as &[String])?;
                map.end()
            }
            ResolvedArea::Named(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("name", name)?;
                map.end()
            }
        }
    }
}

/// Resolved theme of a roadmap item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    /// No `theme:` label, or the roadmap item is unknown.
    #[default]
    None,
    Named(String),
}

impl Serialize for ResolvedTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResolvedTheme::None => serializer.serialize_map(Some(0))?.end(),
            ResolvedTheme::Named(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("name", name)?;
                map.end()
            }
        }
    }
}
