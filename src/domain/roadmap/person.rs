use serde::Serialize;

use crate::domain::tracker::RawUser;

/// A tracker account referenced as assignee or reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub display_name: String,
}

impl From<&RawUser> for Person {
    fn from(user: &RawUser) -> Self {
        Self {
            id: user.account_id.clone(),
            display_name: user.display_name.clone().unwrap_or_default(),
        }
    }
}
