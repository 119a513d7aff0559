//! Comment operations: fetch threads and post comments

use reelgrid_domain::{Comment, PagedList, Result, Video};

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{join_uri, BodyBuilder, RequestDescriptor};
use crate::validation::{validate_object_uri, validate_uri};

/// Suffix of a video's comments collection
const COMMENTS: &str = "comments";
/// Query parameter unlocking password-protected videos
const PASSWORD_PARAM: &str = "password";

impl PlatformClient {
    /// Fetch a page of comments from a comments-collection URI.
    pub fn fetch_comments<C>(&self, comments_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Comment>>) + Send + 'static,
    {
        let built =
            validate_uri(Some(comments_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a video object's comments. Adapter over
    /// [`Self::fetch_comments`] using the video's `comments` connection URI.
    pub fn fetch_comments_for_video<C>(&self, video: &Video, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Comment>>) + Send + 'static,
    {
        match validate_object_uri(video.comments_uri(), "comments connection") {
            Ok(uri) => self.fetch_comments(&uri, options, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Post a comment on a video by URI.
    ///
    /// `password` unlocks password-protected videos and is carried as a
    /// query parameter when present.
    pub fn post_comment<C>(
        &self,
        video_uri: &str,
        text: impl Into<String>,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<Comment>) + Send + 'static,
    {
        let body = BodyBuilder::new().required("text", text.into()).build();
        let built = validate_uri(Some(video_uri)).map(|uri| {
            let mut descriptor =
                RequestDescriptor::post(join_uri(&uri, COMMENTS)).with_body(body);
            if let Some(password) = password {
                descriptor = descriptor.with_query_param(PASSWORD_PARAM, password);
            }
            descriptor
        });
        self.dispatch(built, callback)
    }

    /// Post a comment on a video object. Adapter over [`Self::post_comment`].
    pub fn post_comment_object<C>(
        &self,
        video: &Video,
        text: impl Into<String>,
        password: Option<&str>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<Comment>) + Send + 'static,
    {
        match validate_object_uri(video.uri.as_deref(), "video") {
            Ok(uri) => self.post_comment(&uri, text, password, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }
}
