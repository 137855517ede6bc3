//! Stage resolution.
//!
//! Ticket titles carry their release stage as a bracketed token, e.g.
//! `"Checkout redesign (s2)"`. The last complete `(...)` pair in the title
//! decides; anything that is not a configured stage resolves to `internal`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::domain::engine_config::EngineConfig;

/// Token used for items without a configured stage.
pub const INTERNAL_STAGE: &str = "internal";

/// A resolved stage token (`s1`, `s3+`, `internal`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage(String);

impl Stage {
    /// Creates a stage from a token, as given.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The implicit `internal` stage.
    pub fn internal() -> Self {
        Self(INTERNAL_STAGE.to_string())
    }

    /// Returns the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_internal(&self) -> bool {
        self.0 == INTERNAL_STAGE
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stage resolved from a title, with the byte range of the bracketed
/// substring that produced it (None when the stage fell back to internal
/// without a matching token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMatch {
    pub stage: Stage,
    pub span: Option<Range<usize>>,
}

impl StageMatch {
    /// Returns the title with the matched bracketed substring removed.
    ///
    /// Surrounding whitespace is left exactly as it was.
    pub fn strip_from(&self, title: &str) -> String {
        match &self.span {
            Some(span) => {
                let mut name = String::with_capacity(title.len());
                name.push_str(&title[..span.start]);
                name.push_str(&title[span.end..]);
                name
            }
            None => title.to_string(),
        }
    }
}

/// Resolves the stage of a title, keeping the matched span.
pub fn match_stage(title: &str, config: &EngineConfig) -> StageMatch {
    let Some(span) = last_bracket_pair(title) else {
        return StageMatch {
            stage: Stage::internal(),
            span: None,
        };
    };

    let inner = title[span.start + 1..span.end - 1].to_lowercase();

    if inner == INTERNAL_STAGE {
        return StageMatch {
            stage: Stage::internal(),
            span: Some(span),
        };
    }

    match config
        .stages
        .iter()
        .find(|token| token.to_lowercase() == inner)
    {
        Some(token) => StageMatch {
            stage: Stage::new(token.to_lowercase()),
            span: Some(span),
        },
        None => StageMatch {
            stage: Stage::internal(),
            span: None,
        },
    }
}

/// Resolves the stage token of a title.
pub fn resolve_stage(title: &str, config: &EngineConfig) -> Stage {
    match_stage(title, config).stage
}

/// True iff the stage is a configured stage after the first one.
pub fn is_releasable_stage(stage: &Stage, config: &EngineConfig) -> bool {
    stage_index(stage, config).is_some_and(|index| index >= 1)
}

/// True iff the stage is the last configured stage.
pub fn is_final_release_stage(stage: &Stage, config: &EngineConfig) -> bool {
    config
        .stages
        .last()
        .is_some_and(|last| last.eq_ignore_ascii_case(stage.as_str()))
}

/// True iff the stage is any configured stage.
pub fn is_external_stage(stage: &Stage, config: &EngineConfig) -> bool {
    stage_index(stage, config).is_some()
}

fn stage_index(stage: &Stage, config: &EngineConfig) -> Option<usize> {
    if stage.as_str().is_empty() || stage.is_internal() {
        return None;
    }
    config
        .stages
        .iter()
        .position(|token| token.eq_ignore_ascii_case(stage.as_str()))
}

/// Byte range of the last `(...)` pair whose inner text has no parentheses.
fn last_bracket_pair(title: &str) -> Option<Range<usize>> {
    let mut open: Option<usize> = None;
    let mut last = None;

    for (index, ch) in title.char_indices() {
        match ch {
            '(' => open = Some(index),
            ')' => {
                if let Some(start) = open.take() {
                    last = Some(start..index + 1);
                }
            }
            _ => {}
        }
    }

    last
}
