//! Snapshot source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Location of the captured tracker snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path of the JSON snapshot file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl SnapshotConfig {
    /// Validate snapshot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("snapshot.path"));
        }
        Ok(())
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/snapshot.json")
}
