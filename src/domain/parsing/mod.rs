//! Parsers turning raw tracker records into the reporting model.
//!
//! - `ReleaseItemParser` - one release item per issue
//! - `RoadmapItemParser` - one roadmap item per parent record
//! - `parse_jira_issues` - groups issues into initiatives and roadmap items

mod grouping;
mod release_item_parser;
mod roadmap_item_parser;
mod url;

pub use grouping::parse_jira_issues;
pub use release_item_parser::ReleaseItemParser;
pub use roadmap_item_parser::RoadmapItemParser;
pub use url::{browse_url, tracker_base_url, PLACEHOLDER_TRACKER_HOST};
