//! Organisation and group models

use serde::{Deserialize, Serialize};

/// Response of `share/connections`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub groups: Vec<Connection>,
}

/// A group or organisation the user belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    /// `organisation` or `group`
    #[serde(rename = "type")]
    pub kind: String,
}

impl ConnectionsResponse {
    /// Id of the first connection of type `organisation`
    pub fn organisation_id(&self) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| group.kind == "organisation")
            .map(|group| group.id.as_str())
    }
}
