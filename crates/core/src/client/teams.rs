//! Team and permission management operations

use reelgrid_domain::{PagedList, Result, TeamMembership, TeamRole, User};
use serde_json::Value;

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{join_uri, BodyBuilder, BodyParams, RequestDescriptor};
use crate::validation::{require_wire_value, validate_object_uri, validate_uri};

/// Suffix granting a set of team members access to a folder
const TEAM_PERMISSIONS: &str = "teams/permissions";

/// Parameters for inviting a member to a team
#[derive(Debug, Clone)]
pub struct TeamMemberParams {
    /// Email address to invite
    pub email: String,
    /// Role granted to the new member
    pub role: TeamRole,
    /// Folders the member is granted access to on join
    pub folder_uris: Vec<String>,
    /// Message included in the invitation email
    pub custom_message: Option<String>,
}

impl TeamMemberParams {
    /// Invite parameters with no folder grants and no custom message.
    pub fn new(email: impl Into<String>, role: TeamRole) -> Self {
        Self { email: email.into(), role, folder_uris: Vec::new(), custom_message: None }
    }

    fn into_body(self) -> BodyParams {
        let folder_uris = (!self.folder_uris.is_empty())
            .then(|| Value::from(self.folder_uris.clone()));
        BodyBuilder::new()
            .required("email", self.email)
            .required("role", require_wire_value(&self.role))
            .optional("folder_uris", folder_uris)
            .optional("custom_message", self.custom_message)
            .build()
    }
}

impl PlatformClient {
    /// Fetch a page of team members from a members-collection URI.
    pub fn fetch_team_members<C>(&self, members_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<TeamMembership>>) + Send + 'static,
    {
        let built =
            validate_uri(Some(members_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch the team members of a team-owner object. Adapter over
    /// [`Self::fetch_team_members`] using the owner's `team_members`
    /// connection URI.
    pub fn fetch_team_members_for_user<C>(&self, owner: &User, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<TeamMembership>>) + Send + 'static,
    {
        match validate_object_uri(owner.team_members_uri(), "team members connection") {
            Ok(uri) => self.fetch_team_members(&uri, options, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Invite a member to a team.
    pub fn add_team_member<C>(&self, members_uri: &str, params: TeamMemberParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<TeamMembership>) + Send + 'static,
    {
        let built = validate_uri(Some(members_uri))
            .map(|uri| RequestDescriptor::post(uri).with_body(params.into_body()));
        self.dispatch(built, callback)
    }

    /// Change an existing member's role.
    pub fn change_team_member_role<C>(&self, membership_uri: &str, role: &TeamRole, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<TeamMembership>) + Send + 'static,
    {
        let body = BodyBuilder::new().required("role", require_wire_value(role)).build();
        let built = validate_uri(Some(membership_uri))
            .map(|uri| RequestDescriptor::patch(uri).with_body(body));
        self.dispatch(built, callback)
    }

    /// Remove a member from a team.
    pub fn remove_team_member<C>(&self, membership_uri: &str, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = validate_uri(Some(membership_uri)).map(RequestDescriptor::delete);
        self.dispatch(built, callback)
    }

    /// Grant a set of team members access to a folder.
    ///
    /// Every membership URI is validated; the first invalid one short-
    /// circuits the whole call.
    pub fn grant_folder_access<C>(
        &self,
        folder_uri: &str,
        membership_uris: &[String],
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = grant_descriptor(folder_uri, membership_uris);
        self.dispatch(built, callback)
    }
}

fn grant_descriptor(folder_uri: &str, membership_uris: &[String]) -> Result<RequestDescriptor> {
    let folder_uri = validate_uri(Some(folder_uri))?;
    let mut users = Vec::with_capacity(membership_uris.len());
    for membership_uri in membership_uris {
        let validated = validate_uri(Some(membership_uri))?;
        let mut entry = BodyParams::new();
        entry.insert("uri".into(), validated.into());
        users.push(Value::Object(entry));
    }
    let body = BodyBuilder::new().required("users", users).build();
    Ok(RequestDescriptor::put(join_uri(&folder_uri, TEAM_PERMISSIONS)).with_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_body_includes_role_wire_value() {
        let body = TeamMemberParams::new("new.hire@example.com", TeamRole::Uploader).into_body();
        assert_eq!(body.get("role"), Some(&Value::String("uploader".into())));
        assert!(!body.contains_key("folder_uris"));
        assert!(!body.contains_key("custom_message"));
    }

    #[test]
    fn invite_body_carries_folder_grants_when_present() {
        let mut params = TeamMemberParams::new("new.hire@example.com", TeamRole::Viewer);
        params.folder_uris = vec!["/me/projects/1".into(), "/me/projects/2".into()];
        let body = params.into_body();
        let grants = body.get("folder_uris").and_then(Value::as_array).unwrap();
        assert_eq!(grants.len(), 2);
    }

    #[test]
    fn grant_descriptor_validates_every_membership_uri() {
        let uris = vec!["/users/1/team/members/2".to_string(), "  ".to_string()];
        assert!(grant_descriptor("/me/projects/1", &uris).is_err());
    }

    #[test]
    fn grant_descriptor_targets_permissions_endpoint() {
        let uris = vec!["/users/1/team/members/2".to_string()];
        let descriptor = grant_descriptor("/me/projects/1", &uris).unwrap();
        assert_eq!(descriptor.uri, "/me/projects/1/teams/permissions");
    }
}
