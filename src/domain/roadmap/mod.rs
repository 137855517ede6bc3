//! Reporting domain model.
//!
//! Cycle, initiative, roadmap item and release item types produced by the
//! parsers, plus the validation findings attached to them. Ownership is
//! strictly hierarchical: initiative groups own roadmap items, which own
//! release items.

mod cycle;
mod initiative;
mod person;
mod release_item;
mod resolved;
mod roadmap_item;
mod validation;

pub use cycle::Cycle;
pub use initiative::{Initiative, InitiativeGroup, VIRTUAL_INITIATIVE_ID};
pub use person::Person;
pub use release_item::ReleaseItem;
pub use resolved::{ResolvedArea, ResolvedTheme};
pub use roadmap_item::{RoadmapItem, UNKNOWN_TEAM};
pub use validation::{ValidationItem, ValidationKind};
