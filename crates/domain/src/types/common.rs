//! Shared response scaffolding: paging, connections and interactions

use serde::{Deserialize, Serialize};

/// Navigation links for a paged response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// A page of results returned by a list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedList<T> {
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    #[serde(default)]
    pub paging: Paging,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self { total: None, page: None, per_page: None, paging: Paging::default(), data: Vec::new() }
    }
}

/// A link from a resource to a related collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Connection {
    pub uri: Option<String>,
    pub total: Option<u64>,
    #[serde(default)]
    pub options: Vec<String>,
}

/// The relation collections a resource exposes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionCollection {
    pub albums: Option<Connection>,
    pub comments: Option<Connection>,
    pub folders: Option<Connection>,
    pub followers: Option<Connection>,
    pub following: Option<Connection>,
    pub likes: Option<Connection>,
    pub team_members: Option<Connection>,
    pub videos: Option<Connection>,
    pub watchlater: Option<Connection>,
}

/// A toggleable relationship between the current account and a resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interaction {
    pub uri: Option<String>,
    pub added: Option<bool>,
    pub added_time: Option<chrono::DateTime<chrono::Utc>>,
}

/// The interactions a resource exposes for the current account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InteractionCollection {
    pub follow: Option<Interaction>,
    pub like: Option<Interaction>,
    pub watchlater: Option<Interaction>,
}

/// Relation metadata attached to most resources
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub connections: Option<ConnectionCollection>,
    pub interactions: Option<InteractionCollection>,
}
