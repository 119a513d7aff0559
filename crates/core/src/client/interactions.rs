//! Toggleable relationship operations: follow, like and watch-later
//!
//! Each toggle is one boolean-parameterized operation dispatching to one of
//! two idempotent verbs: PUT asserts the relationship, DELETE retracts it.
//! The optional password parameter (for password-protected videos) rides
//! along as a query entry on both verbs.

use reelgrid_domain::{Channel, Result, User, Video};

use super::PlatformClient;
use crate::handle::RequestHandle;
use crate::request::{Method, RequestDescriptor};
use crate::validation::{validate_object_uri, validate_uri};

/// Query parameter unlocking password-protected videos
const PASSWORD_PARAM: &str = "password";

impl PlatformClient {
    /// Follow or unfollow via an interaction URI.
    pub fn update_follow<C>(&self, follow_uri: &str, follow: bool, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(validate_uri(Some(follow_uri)), follow, None, callback)
    }

    /// Follow or unfollow a user object. Adapter over
    /// [`Self::update_follow`] using the user's `follow` interaction URI.
    pub fn update_follow_user<C>(&self, user: &User, follow: bool, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(
            validate_object_uri(user.follow_uri(), "follow interaction"),
            follow,
            None,
            callback,
        )
    }

    /// Follow or unfollow a channel object. Adapter over
    /// [`Self::update_follow`] using the channel's `follow` interaction URI.
    pub fn update_follow_channel<C>(&self, channel: &Channel, follow: bool, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(
            validate_object_uri(channel.follow_uri(), "follow interaction"),
            follow,
            None,
            callback,
        )
    }

    /// Like or unlike via an interaction URI.
    pub fn update_like<C>(
        &self,
        like_uri: &str,
        liked: bool,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(validate_uri(Some(like_uri)), liked, password, callback)
    }

    /// Like or unlike a video object. Adapter over [`Self::update_like`]
    /// using the video's `like` interaction URI.
    pub fn update_like_video<C>(
        &self,
        video: &Video,
        liked: bool,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(
            validate_object_uri(video.like_uri(), "like interaction"),
            liked,
            password,
            callback,
        )
    }

    /// Add to or remove from watch-later via an interaction URI.
    pub fn update_watch_later<C>(
        &self,
        watch_later_uri: &str,
        saved: bool,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(validate_uri(Some(watch_later_uri)), saved, password, callback)
    }

    /// Add a video object to or remove it from watch-later. Adapter over
    /// [`Self::update_watch_later`].
    pub fn update_watch_later_video<C>(
        &self,
        video: &Video,
        saved: bool,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        self.toggle(
            validate_object_uri(video.watch_later_uri(), "watchlater interaction"),
            saved,
            password,
            callback,
        )
    }

    /// Shared toggle tail: verb chosen by `assert_state`, password preserved.
    fn toggle<C>(
        &self,
        uri: Result<String>,
        assert_state: bool,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let method = if assert_state { Method::Put } else { Method::Delete };
        let built = uri.map(|uri| {
            let mut descriptor = RequestDescriptor::new(method, uri);
            if let Some(password) = password {
                descriptor = descriptor.with_query_param(PASSWORD_PARAM, password);
            }
            descriptor
        });
        self.dispatch(built, callback)
    }
}
