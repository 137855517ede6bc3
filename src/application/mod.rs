//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler here is a read-only query over the issue source.

pub mod handlers;

pub use handlers::{
    GetCycleReportHandler, GetCycleReportQuery, ListCyclesHandler, ListCyclesQuery, ReportError,
};
