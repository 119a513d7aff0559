//! Comment resource types

use serde::{Deserialize, Serialize};

use crate::types::common::Metadata;
use crate::types::user::User;

/// A comment left on a video
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comment {
    pub uri: Option<String>,
    pub text: Option<String>,
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    pub user: Option<User>,
    pub metadata: Option<Metadata>,
}
