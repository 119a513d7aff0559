//! Domain model types
//!
//! Payload types returned by the platform API. Responses are frequently
//! partial (field-filtered), so most fields are optional and unknown fields
//! are ignored on deserialization.

pub mod account;
pub mod album;
pub mod channel;
pub mod comment;
pub mod common;
pub mod folder;
pub mod team;
pub mod user;
pub mod video;

pub use account::AuthenticatedAccount;
pub use album::Album;
pub use channel::Channel;
pub use comment::Comment;
pub use common::{Connection, ConnectionCollection, Interaction, InteractionCollection, Metadata, PagedList, Paging};
pub use folder::Folder;
pub use team::TeamMembership;
pub use user::User;
pub use video::Video;
