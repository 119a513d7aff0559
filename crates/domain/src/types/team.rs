//! Team membership resource types

use serde::{Deserialize, Serialize};

use crate::enums::TeamRole;
use crate::types::user::User;

/// A single member of a team and their permission level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMembership {
    pub uri: Option<String>,
    pub email: Option<String>,
    pub role: Option<TeamRole>,
    pub status: Option<String>,
    pub joined_time: Option<chrono::DateTime<chrono::Utc>>,
    pub user: Option<User>,
}
