//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IssueSource` - Read access to the tracker's cycles, issues and
//!   roadmap item records

mod issue_source;

pub use issue_source::{IssueSource, IssueSourceError};
