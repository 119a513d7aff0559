//! Album resource types

use serde::{Deserialize, Serialize};

use crate::enums::ViewPrivacy;
use crate::types::common::Metadata;
use crate::types::user::User;

/// Privacy settings attached to an album resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumPrivacy {
    pub view: Option<ViewPrivacy>,
}

/// A curated collection of videos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    pub uri: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub duration: Option<u64>,
    pub created_time: Option<chrono::DateTime<chrono::Utc>>,
    pub modified_time: Option<chrono::DateTime<chrono::Utc>>,
    pub privacy: Option<AlbumPrivacy>,
    pub user: Option<User>,
    pub metadata: Option<Metadata>,
}

impl Album {
    /// URI of this album's videos collection.
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
