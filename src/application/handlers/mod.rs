//! Application handlers.
//!
//! Query handlers that fetch tracker data and run the domain engine.

pub mod report;

pub use report::{
    GetCycleReportHandler, GetCycleReportQuery, GetCycleReportResult, ListCyclesHandler,
    ListCyclesQuery, ListCyclesResult, ReportError,
};
