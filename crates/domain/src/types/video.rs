//! Video resource types

use serde::{Deserialize, Serialize};

use crate::enums::{CommentPrivacy, EmbedPrivacy, ViewPrivacy};
use crate::types::common::Metadata;
use crate::types::user::User;

/// Privacy settings attached to a video resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoPrivacy {
    pub view: Option<ViewPrivacy>,
    pub embed: Option<EmbedPrivacy>,
    pub comments: Option<CommentPrivacy>,
    pub download: Option<bool>,
    pub add: Option<bool>,
}

/// A video hosted on the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    pub uri: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub duration: Option<u64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub language: Option<String>,
    pub created_time: Option<chrono::DateTime<chrono::Utc>>,
    pub modified_time: Option<chrono::DateTime<chrono::Utc>>,
    pub release_time: Option<chrono::DateTime<chrono::Utc>>,
    pub privacy: Option<VideoPrivacy>,
    pub user: Option<User>,
    pub status: Option<String>,
    pub metadata: Option<Metadata>,
}

impl Video {
    /// URI of the current account's like interaction for this video.
    #[must_use]
    pub fn like_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .interactions
            .as_ref()?
            .like
            .as_ref()?
            .uri
            .as_deref()
    }

    /// URI of the current account's watch-later interaction for this video.
    #[must_use]
    pub fn watch_later_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .interactions
            .as_ref()?
            .watchlater
            .as_ref()?
            .uri
            .as_deref()
    }

    /// URI of this video's comments collection.
    #[must_use]
    pub fn comments_uri(&self) -> Option<&str> {
        self.metadata
            .as_ref()?
            .connections
            .as_ref()?
            .comments
            .as_ref()?
            .uri
            .as_deref()
    }
}
