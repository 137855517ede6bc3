//! HTTP DTOs for report endpoints.
//!
//! Reports are read-only and the domain types already serialize to the
//! wire shape, so they are re-exported directly.

pub use crate::domain::progress::{CycleOverview, ProgressBreakdown, ProgressMetrics};
pub use crate::domain::report::CycleReport;
pub use crate::domain::roadmap::Cycle;

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_ERROR".to_string(),
            message: message.into(),
        }
    }
}
