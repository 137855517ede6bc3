//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `snapshot` - Issue sources over captured tracker data
//! - `http` - REST API endpoints

pub mod http;
pub mod snapshot;

pub use snapshot::{InMemoryIssueSource, JsonSnapshotSource};
