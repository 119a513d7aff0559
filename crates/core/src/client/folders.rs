//! Folder (project) operations: create, edit, delete, fetch and membership

use reelgrid_domain::constants::ME_URI;
use reelgrid_domain::{Folder, PagedList, Result, User, Video};

use super::{FetchOptions, PlatformClient};
use crate::handle::RequestHandle;
use crate::request::{join_uri, BodyBuilder, RequestDescriptor};
use crate::validation::{validate_object_uri, validate_uri};

/// Suffix of a user's folders collection
const PROJECTS: &str = "projects";
/// Query flag controlling whether a deleted folder takes its videos with it
const SHOULD_DELETE_CLIPS: &str = "should_delete_clips";

impl PlatformClient {
    /// Create a folder for the signed-in user.
    pub fn create_folder<C>(&self, name: impl Into<String>, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Folder>) + Send + 'static,
    {
        self.create_folder_at(&join_uri(ME_URI, PROJECTS), name, callback)
    }

    /// Create a folder under a folders-collection URI.
    pub fn create_folder_at<C>(
        &self,
        folders_uri: &str,
        name: impl Into<String>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<Folder>) + Send + 'static,
    {
        let body = BodyBuilder::new().required("name", name.into()).build();
        let built =
            validate_uri(Some(folders_uri)).map(|uri| RequestDescriptor::post(uri).with_body(body));
        self.dispatch(built, callback)
    }

    /// Create a folder under a user's folders collection.
    ///
    /// Adapter over [`Self::create_folder_at`] using the user's `folders`
    /// connection URI.
    pub fn create_folder_for_user<C>(
        &self,
        user: &User,
        name: impl Into<String>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<Folder>) + Send + 'static,
    {
        match validate_object_uri(user.folders_uri(), "folders connection") {
            Ok(uri) => self.create_folder_at(&uri, name, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Rename a folder by URI.
    pub fn edit_folder<C>(&self, folder_uri: &str, name: impl Into<String>, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Folder>) + Send + 'static,
    {
        let body = BodyBuilder::new().required("name", name.into()).build();
        let built =
            validate_uri(Some(folder_uri)).map(|uri| RequestDescriptor::patch(uri).with_body(body));
        self.dispatch(built, callback)
    }

    /// Rename a folder object. Adapter over [`Self::edit_folder`].
    pub fn edit_folder_object<C>(
        &self,
        folder: &Folder,
        name: impl Into<String>,
        callback: C,
    ) -> RequestHandle
    where
        C: FnOnce(Result<Folder>) + Send + 'static,
    {
        match validate_object_uri(folder.uri.as_deref(), "folder") {
            Ok(uri) => self.edit_folder(&uri, name, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Delete a folder by URI.
    ///
    /// `delete_clips` controls whether the folder's videos are deleted with
    /// it or merely unfiled.
    pub fn delete_folder<C>(&self, folder_uri: &str, delete_clips: bool, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = validate_uri(Some(folder_uri)).map(|uri| {
            RequestDescriptor::delete(uri)
                .with_query_param(SHOULD_DELETE_CLIPS, delete_clips.to_string())
        });
        self.dispatch(built, callback)
    }

    /// Delete a folder object. Adapter over [`Self::delete_folder`].
    pub fn delete_folder_object<C>(&self, folder: &Folder, delete_clips: bool, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match validate_object_uri(folder.uri.as_deref(), "folder") {
            Ok(uri) => self.delete_folder(&uri, delete_clips, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Fetch a single folder.
    pub fn fetch_folder<C>(&self, folder_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<Folder>) + Send + 'static,
    {
        let built =
            validate_uri(Some(folder_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a page of folders from a folders-collection URI.
    pub fn fetch_folder_list<C>(&self, folders_uri: &str, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Folder>>) + Send + 'static,
    {
        let built =
            validate_uri(Some(folders_uri)).map(|uri| options.apply(RequestDescriptor::get(uri)));
        self.dispatch(built, callback)
    }

    /// Fetch a user object's folders. Adapter over
    /// [`Self::fetch_folder_list`] using the user's `folders` connection URI.
    pub fn fetch_folder_list_for_user<C>(&self, user: &User, options: FetchOptions, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<PagedList<Folder>>) + Send + 'static,
    {
        match validate_object_uri(user.folders_uri(), "folders connection") {
            Ok(uri) => self.fetch_folder_list(&uri, options, callback),
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// File a video into a folder.
    pub fn add_video_to_folder<C>(&self, folder_uri: &str, video_uri: &str, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = folder_video_uri(folder_uri, video_uri).map(RequestDescriptor::put);
        self.dispatch(built, callback)
    }

    /// File a video object into a folder object. Adapter over
    /// [`Self::add_video_to_folder`].
    pub fn add_video_to_folder_object<C>(&self, folder: &Folder, video: &Video, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match folder_object_uris(folder, video) {
            Ok((folder_uri, video_uri)) => {
                self.add_video_to_folder(&folder_uri, &video_uri, callback)
            }
            Err(error) => self.dispatch(Err(error), callback),
        }
    }

    /// Remove a video from a folder.
    pub fn remove_video_from_folder<C>(&self, folder_uri: &str, video_uri: &str, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        let built = folder_video_uri(folder_uri, video_uri).map(RequestDescriptor::delete);
        self.dispatch(built, callback)
    }

    /// Remove a video object from a folder object. Adapter over
    /// [`Self::remove_video_from_folder`].
    pub fn remove_video_from_folder_object<C>(&self, folder: &Folder, video: &Video, callback: C) -> RequestHandle
    where
        C: FnOnce(Result<()>) + Send + 'static,
    {
        match folder_object_uris(folder, video) {
            Ok((folder_uri, video_uri)) => {
                self.remove_video_from_folder(&folder_uri, &video_uri, callback)
            }
            Err(error) => self.dispatch(Err(error), callback),
        }
    }
}

/// Membership path: `{folder_uri}/videos/{video_id}`, both parts validated.
fn folder_video_uri(folder_uri: &str, video_uri: &str) -> Result<String> {
    let folder_uri = validate_uri(Some(folder_uri))?;
    let video_uri = validate_uri(Some(video_uri))?;
    Ok(join_uri(&folder_uri, &video_uri))
}

fn folder_object_uris(folder: &Folder, video: &Video) -> Result<(String, String)> {
    let folder_uri = validate_object_uri(folder.uri.as_deref(), "folder")?;
    let video_uri = validate_object_uri(video.uri.as_deref(), "video")?;
    Ok((folder_uri, video_uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_membership_path() {
        let uri = folder_video_uri("/me/projects/3", "/videos/42").unwrap();
        assert_eq!(uri, "/me/projects/3/videos/42");
    }

    #[test]
    fn folder_object_uris_require_both_uris() {
        let folder = Folder { uri: Some("/me/projects/3".into()), ..Folder::default() };
        let video = Video::default();
        assert!(folder_object_uris(&folder, &video).is_err());
    }
}
