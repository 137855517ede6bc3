//! Read-only configuration consumed by the transformation engine.
//!
//! Holds the label dictionaries, the ordered stage list, the status mapping
//! table and the tracker host. Built once at startup and shared behind an
//! `Arc`; the engine never mutates it.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::labels::LabelType;
use crate::domain::status::CanonicalStatus;

/// Label value -> display name dictionaries, one per label type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelDictionaries {
    #[serde(default)]
    pub area: HashMap<String, String>,
    #[serde(default)]
    pub team: HashMap<String, String>,
    #[serde(default)]
    pub theme: HashMap<String, String>,
    #[serde(default)]
    pub initiative: HashMap<String, String>,
}

impl LabelDictionaries {
    /// Returns the dictionary for a label type.
    pub fn for_type(&self, label_type: LabelType) -> &HashMap<String, String> {
        match label_type {
            LabelType::Area => &self.area,
            LabelType::Team => &self.team,
            LabelType::Theme => &self.theme,
            LabelType::Initiative => &self.initiative,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Label translation dictionaries
    #[serde(default)]
    pub translations: LabelDictionaries,

    /// Ordered stage tokens, earliest first
    #[serde(default = "default_stages")]
    pub stages: Vec<String>,

    /// Raw tracker status id -> canonical status
    #[serde(default)]
    pub status_map: HashMap<String, CanonicalStatus>,

    /// Status used for unmapped status ids
    #[serde(default)]
    pub default_status: CanonicalStatus,

    /// Tracker base URL, e.g. `https://tracker.example.com/rest`
    #[serde(default)]
    pub tracker_host: Option<String>,

    /// Name of the issue field carrying the effort estimate (in weeks)
    #[serde(default = "default_effort_field")]
    pub effort_field: String,
}

impl EngineConfig {
    /// Parses an engine configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Builder-style helper to set the stage list.
    pub fn with_stages<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = stages.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper to add one translation.
    pub fn with_translation(
        mut self,
        label_type: LabelType,
        value: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let dictionary = match label_type {
            LabelType::Area => &mut self.translations.area,
            LabelType::Team => &mut self.translations.team,
            LabelType::Theme => &mut self.translations.theme,
            LabelType::Initiative => &mut self.translations.initiative,
        };
        dictionary.insert(value.into(), name.into());
        self
    }

    /// Builder-style helper to map one raw status id.
    pub fn with_status(mut self, status_id: impl Into<String>, status: CanonicalStatus) -> Self {
        self.status_map.insert(status_id.into(), status);
        self
    }

    /// Builder-style helper to set the tracker host.
    pub fn with_tracker_host(mut self, host: impl Into<String>) -> Self {
        self.tracker_host = Some(host.into());
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            translations: LabelDictionaries::default(),
            stages: default_stages(),
            status_map: HashMap::new(),
            default_status: CanonicalStatus::default(),
            tracker_host: None,
            effort_field: default_effort_field(),
        }
    }
}

fn default_stages() -> Vec<String> {
    ["s1", "s2", "s3", "s3+"].iter().map(|s| s.to_string()).collect()
}

fn default_effort_field() -> String {
    "effort".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_standard_stages() {
        let config = EngineConfig::default();
        assert_eq!(config.stages, vec!["s1", "s2", "s3", "s3+"]);
        assert_eq!(config.default_status, CanonicalStatus::Todo);
        assert_eq!(config.effort_field, "effort");
        assert!(config.tracker_host.is_none());
    }

    #[test]
    fn parses_from_yaml() {
        let yaml = r#"
translations:
  team:
    core: Core Platform
  initiative:
    growth: Growth
stages: [alpha, beta, ga]
status_map:
  "10001": done
  "3": inProgress
default_status: todo
tracker_host: https://tracker.example.com/rest
effort_field: customfield_10016
"#;
        let config = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.translations.team["core"], "Core Platform");
        assert_eq!(config.stages, vec!["alpha", "beta", "ga"]);
        assert_eq!(config.status_map["10001"], CanonicalStatus::Done);
        assert_eq!(config.status_map["3"], CanonicalStatus::InProgress);
        assert_eq!(config.effort_field, "customfield_10016");
        assert!(config.translations.area.is_empty());
    }

    #[test]
    fn empty_yaml_mapping_uses_defaults() {
        let config = EngineConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config.stages.len(), 4);
    }

    #[test]
    fn builder_helpers_populate_dictionaries() {
        let config = EngineConfig::default()
            .with_translation(LabelType::Area, "pay", "Payments")
            .with_status("5", CanonicalStatus::Done);
        assert_eq!(
            config.translations.for_type(LabelType::Area)["pay"],
            "Payments"
        );
        assert_eq!(config.status_map["5"], CanonicalStatus::Done);
    }
}
