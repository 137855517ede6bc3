//! Cycle report HTTP adapter module.
//!
//! Provides REST API endpoints for cycle listing and cycle reports.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ReportApiError, ReportAppState};
pub use routes::report_routes;
