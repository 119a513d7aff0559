//! User operations: fetch and edit

use reelgrid_domain::constants::ME_URI;
use reelgrid_domain::{PagedList, Result, User};

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{BodyBuilder, BodyParams, RequestDescriptor};
use crate::validation::{validate_object_uri, validate_uri};

/// Parameters for editing a user profile
#[derive(Debug, Clone, Default)]
pub struct UserEditParams {
    /// Display name
    pub name: Option<String>,
    /// Free-form location
    pub location: Option<String>,
    /// Profile biography
    pub bio: Option<String>,
}

impl UserEditParams {
    fn into_body(self) -> BodyParams {
        BodyBuilder::new()
            .optional("name", self.name)
            .optional("location", self.location)
            .optional("bio", self.bio)
            .build()
    }
}

impl PlatformClient {
    /// Fetch the signed-in user.
    pub fn fetch_current_user<C>(&self, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<User>) + Send + 'static,
    {
        self.fetch_user(ME_URI, options, callback)
    }

    /// Fetch a user by URI.
    pub fn fetch_user<C>(&self, user_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<User>) + Send + 'static,
    {
        let built =
            validate_uri(Some(user_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a page of users from a users-collection URI (followers,
    /// following, team rosters and similar).
    pub fn fetch_user_list<C>(&self, users_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<User>>) + Send + 'static,
    {
        let built =
            validate_uri(Some(users_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Edit the signed-in user's profile.
    pub fn edit_current_user<C>(&self, params: UserEditParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<User>) + Send + 'static,
    {
        self.edit_user(ME_URI, params, callback)
    }

    /// Edit a user profile by URI.
    pub fn edit_user<C>(&self, user_uri: &str, params: UserEditParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<User>) + Send + 'static,
    {
        let built = validate_uri(Some(user_uri))
            .map(|uri| RequestDescriptor::patch(uri).with_body(params.into_body()));
        self.dispatch(built, callback)
    }

    /// Edit a user object. Adapter over [`Self::edit_user`].
    pub fn edit_user_object<C>(&self, user: &User, params: UserEditParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<User>) + Send + 'static,
    {
        match validate_object_uri(user.uri.as_deref(), "user") {
            Ok(uri) => self.edit_user(&uri, params, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn edit_body_contains_only_present_fields() {
        let params = UserEditParams { location: Some("Porto".into()), ..UserEditParams::default() };
        let body = params.into_body();
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("location"), Some(&Value::String("Porto".into())));
    }
}
