//! HTTP routes for report endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_cycle_report, list_cycles, ReportAppState};

/// Creates the report router with all routes.
pub fn report_routes(state: ReportAppState) -> Router {
    Router::new()
        // GET /api/cycles
        .route("/api/cycles", get(list_cycles))
        // GET /api/cycles/:cycle_id/report
        .route("/api/cycles/:cycle_id/report", get(get_cycle_report))
        .with_state(state)
}
