//! CycleState enum for the lifecycle of a delivery cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a cycle, mirroring the tracker's sprint state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CycleState {
    Active,
    #[default]
    Future,
    Closed,
}

impl CycleState {
    /// Parses a raw sprint state, case-insensitively.
    ///
    /// Returns None for states the tracker may add later.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Some(CycleState::Active),
            "future" => Some(CycleState::Future),
            "closed" => Some(CycleState::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleState::Active => "active",
            CycleState::Future => "future",
            CycleState::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_is_case_insensitive() {
        assert_eq!(CycleState::from_raw("ACTIVE"), Some(CycleState::Active));
        assert_eq!(CycleState::from_raw("future"), Some(CycleState::Future));
        assert_eq!(CycleState::from_raw(" Closed "), Some(CycleState::Closed));
    }

    #[test]
    fn from_raw_rejects_unknown_states() {
        assert_eq!(CycleState::from_raw("archived"), None);
        assert_eq!(CycleState::from_raw(""), None);
    }

    #[test]
    fn serializes_to_lowercase_json() {
        assert_eq!(
            serde_json::to_string(&CycleState::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(format!("{}", CycleState::Closed), "closed");
    }
}
