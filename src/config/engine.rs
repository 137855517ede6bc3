//! Engine section loading and checks

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::engine_config::EngineConfig;

use super::error::{ConfigError, ValidationError};

#[derive(Debug, Default, Deserialize)]
struct EngineDocument {
    #[serde(default)]
    engine: EngineConfig,
}

/// Read the `engine` section of the YAML file at `path`.
///
/// Dictionary keys are tracker label values, so the section is parsed with
/// serde_yaml directly and keys keep their case. A missing file, an empty
/// file or a file without an `engine` key yields the defaults.
pub fn load_engine_section(path: &Path) -> Result<EngineConfig, ConfigError> {
    if !path.is_file() {
        return Ok(EngineConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    if text.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    let document: EngineDocument = serde_yaml::from_str(&text)?;
    Ok(document.engine)
}

/// Validate the engine section.
///
/// Stage tokens are compared case-insensitively, matching how titles are
/// resolved.
pub fn validate_engine(engine: &EngineConfig) -> Result<(), ValidationError> {
    if engine.stages.is_empty() {
        return Err(ValidationError::EmptyStageList);
    }

    let mut seen = HashSet::new();
    for stage in &engine.stages {
        let token = stage.trim().to_lowercase();
        if token.is_empty() {
            return Err(ValidationError::MissingRequired("engine.stages[]"));
        }
        if !seen.insert(token) {
            return Err(ValidationError::DuplicateStage(stage.clone()));
        }
    }
    Ok(())
}
