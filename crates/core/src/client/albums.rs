//! Album operations: create, edit, delete, fetch and membership

use reelgrid_domain::constants::ME_URI;
use reelgrid_domain::{Album, PagedList, Result, User, Video, ViewPrivacy};

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{join_uri, BodyBuilder, BodyParams, RequestDescriptor};
use crate::validation::{require_wire_value, validate_object_uri, validate_uri};

/// Suffix of a user's albums collection
const ALBUMS: &str = "albums";

/// Parameters for creating or editing an album
#[derive(Debug, Clone, Default)]
pub struct AlbumParams {
    /// Album display name (required by the platform, not URI-validated)
    pub name: String,
    /// View privacy; attached inside a grouped `privacy` sub-object
    pub privacy: Option<ViewPrivacy>,
    /// Password, required by the platform when privacy is password-gated
    pub password: Option<String>,
    /// Album description
    pub description: Option<String>,
}

impl AlbumParams {
    /// Parameters with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    fn into_body(self) -> BodyParams {
        let mut privacy = BodyParams::new();
        if let Some(view) = &self.privacy {
            privacy.insert("view".into(), require_wire_value(view).into());
        }
        BodyBuilder::new()
            .required("name", self.name)
            .optional("description", self.description)
            .optional("password", self.password)
            .group("privacy", privacy)
            .build()
    }
}

impl PlatformClient {
    /// Create an album for the signed-in user.
    pub fn create_album<C>(&self, params: AlbumParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Album>) + Send + 'static,
    {
        self.create_album_at(&join_uri(ME_URI, ALBUMS), params, callback)
    }

    /// Create an album under an albums-collection URI.
    pub fn create_album_at<C>(&self, albums_uri: &str, params: AlbumParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Album>) + Send + 'static,
    {
        let built = validate_uri(Some(albums_uri))
            .map(|uri| RequestDescriptor::post(uri).with_body(params.into_body()));
        self.dispatch(built, callback)
    }

    /// Create an album under a user's albums collection.
    ///
    /// Adapter over [`Self::create_album_at`] using the user's `albums`
    /// connection URI.
    pub fn create_album_for_user<C>(&self, user: &User, params: AlbumParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Album>) + Send + 'static,
    {
        match validate_object_uri(user.albums_uri(), "albums connection") {
            Ok(uri) => self.create_album_at(&uri, params, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Edit an album by URI.
    pub fn edit_album<C>(&self, album_uri: &str, params: AlbumParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Album>) + Send + 'static,
    {
        let built = validate_uri(Some(album_uri))
            .map(|uri| RequestDescriptor::patch(uri).with_body(params.into_body()));
        self.dispatch(built, callback)
    }

    /// Edit an album object. Adapter over [`Self::edit_album`].
    pub fn edit_album_object<C>(&self, album: &Album, params: AlbumParams, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Album>) + Send + 'static,
    {
        match validate_object_uri(album.uri.as_deref(), "album") {
            Ok(uri) => self.edit_album(&uri, params, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Delete an album by URI.
    pub fn delete_album<C>(&self, album_uri: &str, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = validate_uri(Some(album_uri)).map(RequestDescriptor::delete);
        self.dispatch(built, callback)
    }

    /// Delete an album object. Adapter over [`Self::delete_album`].
    pub fn delete_album_object<C>(&self, album: &Album, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match validate_object_uri(album.uri.as_deref(), "album") {
            Ok(uri) => self.delete_album(&uri, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Fetch a single album.
    pub fn fetch_album<C>(&self, album_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Album>) + Send + 'static,
    {
        let built =
            validate_uri(Some(album_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a page of albums from an albums-collection URI.
    pub fn fetch_album_list<C>(&self, albums_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Album>>) + Send + 'static,
    {
        let built =
            validate_uri(Some(albums_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a user object's albums. Adapter over
    /// [`Self::fetch_album_list`] using the user's `albums` connection URI.
    pub fn fetch_album_list_for_user<C>(&self, user: &User, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Album>>) + Send + 'static,
    {
        match validate_object_uri(user.albums_uri(), "albums connection") {
            Ok(uri) => self.fetch_album_list(&uri, options, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Add a video to an album.
    pub fn add_video_to_album<C>(&self, album_uri: &str, video_uri: &str, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = album_video_uri(album_uri, video_uri).map(RequestDescriptor::put);
        self.dispatch(built, callback)
    }

    /// Add a video object to an album object. Adapter over
    /// [`Self::add_video_to_album`].
    pub fn add_video_to_album_object<C>(&self, album: &Album, video: &Video, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match object_membership_uris(album, video) {
            Ok((album_uri, video_uri)) => self.add_video_to_album(&album_uri, &video_uri, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Remove a video from an album.
    pub fn remove_video_from_album<C>(&self, album_uri: &str, video_uri: &str, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = album_video_uri(album_uri, video_uri).map(RequestDescriptor::delete);
        self.dispatch(built, callback)
    }

    /// Remove a video object from an album object. Adapter over
    /// [`Self::remove_video_from_album`].
    pub fn remove_video_from_album_object<C>(&self, album: &Album, video: &Video, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match object_membership_uris(album, video) {
            Ok((album_uri, video_uri)) => {
                self.remove_video_from_album(&album_uri, &video_uri, callback)
            }
            Err(error) => self.dispatch(Err(error), callback),
        }
    }
}

/// Membership path: `{album_uri}/videos/{video_id}`, both parts validated.
fn album_video_uri(album_uri: &str, video_uri: &str) -> Result<String> {
    let album_uri = validate_uri(Some(album_uri))?;
    let video_uri = validate_uri(Some(video_uri))?;
    // video URIs are absolute resource paths like `/videos/123`; joining the
    // album URI with the full video URI yields the membership endpoint
    Ok(join_uri(&album_uri, &video_uri))
}

fn object_membership_uris(album: &Album, video: &Video) -> Result<(String, String)> {
    let album_uri = validate_object_uri(album.uri.as_deref(), "album")?;
    let video_uri = validate_object_uri(video.uri.as_deref(), "video")?;
    Ok((album_uri, video_uri))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn params_group_privacy_only_when_present() {
        let body = AlbumParams::named("Road trip").into_body();
        assert!(!body.contains_key("privacy"));

        let params = AlbumParams {
            name: "Road trip".into(),
            privacy: Some(ViewPrivacy::Password),
            password: Some("hunter2".into()),
            description: None,
        };
        let body = params.into_body();
        let privacy = body.get("privacy").and_then(Value::as_object).unwrap();
        assert_eq!(privacy.get("view"), Some(&Value::String("password".into())));
        assert!(!body.contains_key("description"));
    }

    #[test]
    fn membership_uri_joins_album_and_video() {
        let uri = album_video_uri("/albums/9", "/videos/42").unwrap();
        assert_eq!(uri, "/albums/9/videos/42");
    }

    #[test]
    fn membership_uri_rejects_traversal_in_either_part() {
        assert!(album_video_uri("/albums/../9", "/videos/42").is_err());
        assert!(album_video_uri("/albums/9", "").is_err());
    }
}
