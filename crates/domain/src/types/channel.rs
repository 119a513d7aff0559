//! Channel resource types

use serde::{Deserialize, Serialize};

use crate::types::common::Metadata;
use crate::types::user::User;

/// A curated channel of videos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Channel {
    pub uri: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub created_time: Option<chrono::DateTime<chrono::Utc>>,
    pub modified_time: Option<chrono::DateTime<chrono::Utc>>,
    pub user: Option<User>,
    pub metadata: Option<Metadata>,
}

impl Channel {
    /// URI of the current account's follow interaction for this channel.
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
}
