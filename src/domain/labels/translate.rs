//! Dictionary-based label translation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::engine_config::{EngineConfig, LabelDictionaries};

/// The label categories that have a translation dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelType {
    Area,
    Team,
    Theme,
    Initiative,
}

impl LabelType {
    /// Returns the label prefix used in the tracker (`area`, `team`, ...).
    pub fn prefix(&self) -> &'static str {
        match self {
            LabelType::Area => "area",
            LabelType::Team => "team",
            LabelType::Theme => "theme",
            LabelType::Initiative => "initiative",
        }
    }
}

impl fmt::Display for LabelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Outcome of a strict dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Found(String),
    NotFound,
}

impl Translation {
    /// Returns the translated name, if found.
    pub fn into_option(self) -> Option<String> {
        match self {
            Translation::Found(name) => Some(name),
            Translation::NotFound => None,
        }
    }

    /// Returns the translated name or the supplied raw value.
    pub fn or_raw(self, raw: &str) -> String {
        match self {
            Translation::Found(name) => name,
            Translation::NotFound => raw.to_string(),
        }
    }
}

/// Looks a label value up in the dictionary for its type.
pub fn lookup_label(
    label_type: LabelType,
    value: &str,
    dictionaries: &LabelDictionaries,
) -> Translation {
    match dictionaries.for_type(label_type).get(value) {
        Some(name) => Translation::Found(name.clone()),
        None => Translation::NotFound,
    }
}

/// Translates a label value, returning None when no dictionary entry exists.
pub fn translate_label_without_fallback(
    label_type: LabelType,
    value: &str,
    config: &EngineConfig,
) -> Option<String> {
    lookup_label(label_type, value, &config.translations).into_option()
}

/// Translates a label value, falling back to the raw value when no
/// dictionary entry exists. An empty value always maps to `""`.
pub fn translate_label(label_type: LabelType, value: &str, config: &EngineConfig) -> String {
    if value.is_empty() {
        return String::new();
    }
    lookup_label(label_type, value, &config.translations).or_raw(value)
}
