//! Snapshot issue sources.
//!
//! Serve tracker data from a captured snapshot instead of a live tracker:
//! `InMemoryIssueSource` for tests and embedding, `JsonSnapshotSource` for
//! a snapshot file on disk.

mod document;
mod in_memory;
mod json_file;

pub use document::{SnapshotCycle, SnapshotDocument};
pub use in_memory::InMemoryIssueSource;
pub use json_file::JsonSnapshotSource;
