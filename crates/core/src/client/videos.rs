//! Video operations: fetch, edit and delete

use reelgrid_domain::{
    CommentPrivacy, EmbedPrivacy, PagedList, Result, Video, ViewPrivacy,
};

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{BodyBuilder, BodyParams, QueryParams, RequestDescriptor};
use crate::validation::{require_wire_value, validate_object_uri, validate_uri};

/// Parameters for editing a video
///
/// All fields are optional; absent fields are never emitted. The privacy
/// flags are grouped into a `privacy` sub-object that is attached only when
/// at least one flag is present.
#[derive(Debug, Clone, Default)]
pub struct VideoEditParams {
    /// Video title
    pub name: Option<String>,
    /// Video description
    pub description: Option<String>,
    /// Password, required by the platform when view privacy is `password`
    pub password: Option<String>,
    /// Who may view the video
    pub view: Option<ViewPrivacy>,
    /// Where the video may be embedded
    pub embed: Option<EmbedPrivacy>,
    /// Who may comment on the video
    pub comments: Option<CommentPrivacy>,
    /// Whether viewers may download the source file
    pub download: Option<bool>,
    /// Whether viewers may add the video to their own collections
    pub add: Option<bool>,
}

impl VideoEditParams {
    fn into_body(self) -> BodyParams {
        let mut privacy = BodyParams::new();
        if let Some(view) = &self.view {
            privacy.insert("view".into(), require_wire_value(view).into());
        }
        if let Some(embed) = &self.embed {
            privacy.insert("embed".into(), require_wire_value(embed).into());
        }
        if let Some(comments) = &self.comments {
            privacy.insert("comments".into(), require_wire_value(comments).into());
        }
        if let Some(download) = self.download {
            privacy.insert("download".into(), download.into());
        }
        if let Some(add) = self.add {
            privacy.insert("add".into(), add.into());
        }
        BodyBuilder::new()
            .optional("name", self.name)
            .optional("description", self.description)
            .optional("password", self.password)
            .group("privacy", privacy)
            .build()
    }
}

impl PlatformClient {
    /// Fetch a single video.
    pub fn fetch_video<C>(&self, video_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Video>) + Send + 'static,
    {
        let built =
            validate_uri(Some(video_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a page of videos from a videos-collection URI.
    pub fn fetch_video_list<C>(&self, videos_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Video>>) + Send + 'static,
    {
        let built =
            validate_uri(Some(videos_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Edit a video's settings by URI.
    pub fn edit_video<C>(&self, video_uri: &str, params: VideoEditParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Video>) + Send + 'static,
    {
        let built = validate_uri(Some(video_uri))
            .map(|uri| RequestDescriptor::patch(uri).with_body(params.into_body()));
        self.dispatch(built, callback)
    }

    /// Edit a video object. Adapter over [`Self::edit_video`].
    pub fn edit_video_object<C>(&self, video: &Video, params: VideoEditParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Video>) + Send + 'static,
    {
        match validate_object_uri(video.uri.as_deref(), "video") {
            Ok(uri) => self.edit_video(&uri, params, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Delete a video by URI, with optional caller query entries.
    pub fn delete_video<C>(&self, video_uri: &str, query: QueryParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built =
            validate_uri(Some(video_uri)).map(|uri| RequestDescriptor::delete(uri).merge_query(query));
        self.dispatch(built, callback)
    }

    /// Delete a video object. Adapter over [`Self::delete_video`].
    pub fn delete_video_object<C>(&self, video: &Video, query: QueryParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match validate_object_uri(video.uri.as_deref(), "video") {
            Ok(uri) => self.delete_video(&uri, query, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn empty_params_produce_empty_body() {
        let body = VideoEditParams::default().into_body();
        assert!(body.is_empty());
    }

    #[test]
    fn privacy_flags_are_grouped() {
        let params = VideoEditParams {
            name: Some("Launch day".into()),
            view: Some(ViewPrivacy::Unlisted),
            download: Some(false),
            ..VideoEditParams::default()
        };
        let body = params.into_body();

        let privacy = body.get("privacy").and_then(Value::as_object).unwrap();
        assert_eq!(privacy.get("view"), Some(&Value::String("unlisted".into())));
        assert_eq!(privacy.get("download"), Some(&Value::Bool(false)));
        assert_eq!(body.get("name"), Some(&Value::String("Launch day".into())));
        assert!(!body.contains_key("description"));
    }

    #[test]
    #[should_panic(expected = "empty wire value")]
    fn broken_privacy_enum_is_a_contract_violation() {
        let params = VideoEditParams {
            view: Some(ViewPrivacy::Other(String::new())),
            ..VideoEditParams::default()
        };
        let _ = params.into_body();
    }
}
