//! Folder (project) resource types

use serde::{Deserialize, Serialize};

use crate::types::common::Metadata;
use crate::types::user::User;

/// A folder used to organize a user's or team's videos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Folder {
    pub uri: Option<String>,
    pub name: Option<String>,
    pub created_time: Option<chrono::DateTime<chrono::Utc>>,
    pub modified_time: Option<chrono::DateTime<chrono::Utc>>,
    pub user: Option<User>,
    pub metadata: Option<Metadata>,
}

impl Folder {
    /// URI of this folder's videos collection.
    #[must_use]
    pub fn videos_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .connections
            .as_ref()?
            .videos
            .as_ref()?
            .uri
            .as_deref()
    }
}
