//! Cycle report query handlers.

mod error;
mod get_cycle_report;
mod list_cycles;

pub use error::ReportError;
pub use get_cycle_report::{GetCycleReportHandler, GetCycleReportQuery, GetCycleReportResult};
pub use list_cycles::{ListCyclesHandler, ListCyclesQuery, ListCyclesResult};
