//! HTTP adapters - REST API implementations.
//!
//! `report` exposes the cycle endpoints; `api_router` wraps them with the
//! shared tracing, timeout and CORS layers.

pub mod report;

use axum::Router;
use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use report::{report_routes, ErrorResponse, ReportApiError, ReportAppState};

/// Builds the full API router.
pub fn api_router(state: ReportAppState, server: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.allowed_origins()));

    report_routes(state).layer(middleware)
}

/// Read-only CORS policy; any origin when none are configured.
fn cors_layer(origins: &[&str]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods([Method::GET]);
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(allowed))
    }
}
