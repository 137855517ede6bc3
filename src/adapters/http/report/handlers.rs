//! HTTP handlers for report endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::handlers::{
    GetCycleReportHandler, GetCycleReportQuery, ListCyclesHandler, ListCyclesQuery, ReportError,
};
use crate::domain::engine_config::EngineConfig;
use crate::domain::foundation::CycleState;
use crate::domain::report::InitiativeOrder;
use crate::ports::IssueSource;

use super::dto::{Cycle, CycleReport, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Report API error that implements IntoResponse.
#[derive(Debug)]
pub enum ReportApiError {
    BadRequest(String),
    NotFound(String),
    BadGateway(String),
}

impl IntoResponse for ReportApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ReportApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ReportApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Cycle", &id))
            }
            ReportApiError::BadGateway(msg) => {
                tracing::warn!(error = %msg, "Issue source request failed");
                (StatusCode::BAD_GATEWAY, ErrorResponse::bad_gateway(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ReportError> for ReportApiError {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::CycleNotFound(id) => ReportApiError::NotFound(id),
            ReportError::InvalidInput(msg) => ReportApiError::BadRequest(msg),
            ReportError::Upstream(msg) => ReportApiError::BadGateway(msg),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing report dependencies.
#[derive(Clone)]
pub struct ReportAppState {
    pub source: Arc<dyn IssueSource>,
    pub engine: Arc<EngineConfig>,
}

impl ReportAppState {
    pub fn new(source: Arc<dyn IssueSource>, engine: Arc<EngineConfig>) -> Self {
        Self { source, engine }
    }

    pub fn get_cycle_report_handler(&self) -> GetCycleReportHandler {
        GetCycleReportHandler::new(self.source.clone(), self.engine.clone())
    }

    pub fn list_cycles_handler(&self) -> ListCyclesHandler {
        ListCyclesHandler::new(self.source.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Query parameters for the cycle list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListCyclesParams {
    /// Optional state filter (`active`, `future`, `closed`).
    pub state: Option<CycleState>,
}

/// Query parameters for the cycle report endpoint.
#[derive(Debug, Deserialize)]
pub struct CycleReportParams {
    /// `weeks` sorts initiatives by total weeks, largest first.
    pub sort: Option<String>,
}

impl CycleReportParams {
    fn order(&self) -> Result<InitiativeOrder, ReportApiError> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(InitiativeOrder::FirstSeen),
            Some("weeks") => Ok(InitiativeOrder::ByWeeks),
            Some(other) => Err(ReportApiError::BadRequest(format!(
                "Unsupported sort order: {}",
                other
            ))),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cycles
///
/// Returns every known cycle, optionally filtered by state.
pub async fn list_cycles(
    State(state): State<ReportAppState>,
    Query(params): Query<ListCyclesParams>,
) -> Result<Json<Vec<Cycle>>, ReportApiError> {
    let query = ListCyclesQuery {
        state: params.state,
    };

    let handler = state.list_cycles_handler();
    let cycles = handler.handle(query).await?;

    Ok(Json(cycles))
}

/// GET /api/cycles/:cycle_id/report
///
/// Returns the initiative tree and progress report for one cycle.
pub async fn get_cycle_report(
    State(state): State<ReportAppState>,
    Path(cycle_id): Path<String>,
    Query(params): Query<CycleReportParams>,
) -> Result<Json<CycleReport>, ReportApiError> {
    let query = GetCycleReportQuery {
        cycle_id,
        order: params.order()?,
    };

    let handler = state.get_cycle_report_handler();
    let report = handler.handle(query).await?;

    Ok(Json(report))
}
