//! User resource types

use serde::{Deserialize, Serialize};

use crate::types::common::Metadata;

/// A user account on the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub uri: Option<String>,
    pub name: Option<String>,
    pub link: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub created_time: Option<chrono::DateTime<chrono::Utc>>,
    pub account: Option<String>,
    pub metadata: Option<Metadata>,
}

impl User {
    /// URI of the current account's follow interaction for this user.
    #[must_use]
    pub fn follow_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .interactions
            .as_ref()?
            .follow
            .as_ref()?
            .uri
            .as_deref()
    }

    /// URI of this user's albums collection.
    #[must_use]
    pub fn albums_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .connections
            .as_ref()?
            .albums
            .as_ref()?
            .uri
            .as_deref()
    }

    /// URI of this user's folders collection.
    #[must_use]
    pub fn folders_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .connections
            .as_ref()?
            .folders
            .as_ref()?
            .uri
            .as_deref()
    }

    /// URI of this user's team members collection.
    #[must_use]
    pub fn team_members_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .connections
            .as_ref()?
            .team_members
            .as_ref()?
            .uri
            .as_deref()
    }
}
