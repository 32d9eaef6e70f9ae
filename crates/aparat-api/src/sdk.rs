use crate::client::AparatApiClient;
use crate::errors::Result;
use aparat_core::models::{
    Category, Comment, LoginInfo, Profile, UploadForm, UploadOptions, Video,
};
use log::error;
use std::path::Path;

/// Main SDK struct for Aparat.
///
/// Wraps [`AparatApiClient`] with the classic degrade-to-empty contract:
/// every read operation logs its failure and resolves to the documented
/// default value (`None` for single entities, an empty `Vec` for listings),
/// so a call site never distinguishes "not found" from "network down".
/// Upload stays fallible here too; a write that may have gone through must
/// not fail silently. Callers that need the cause use the client directly.
pub struct Aparat {
    api_client: AparatApiClient,
}

impl Aparat {
    /// Create a new Aparat instance against the production API
    pub fn new() -> Self {
        let api_client = AparatApiClient::new(None);
        Self { api_client }
    }

    /// Create an instance against a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        let api_client = AparatApiClient::new(Some(base_url));
        Self { api_client }
    }

    /// Wrap an already configured client
    pub fn from_client(api_client: AparatApiClient) -> Self {
        Self { api_client }
    }

    /// The underlying client, for callers that want error causes back
    pub fn client(&self) -> &AparatApiClient {
        &self.api_client
    }

    /// Log in, returning the session payload or `None` on any failure
    pub async fn login(&self, username: &str, password: &str) -> Option<LoginInfo> {
        self.api_client
            .login(username, password)
            .await
            .unwrap_or_else(|e| {
                error!("login for {} failed: {}", username, e);
                None
            })
    }

    /// Get a profile by username
    pub async fn profile(&self, username: &str) -> Option<Profile> {
        self.api_client.profile(username).await.unwrap_or_else(|e| {
            error!("profile lookup for {} failed: {}", username, e);
            None
        })
    }

    /// Search users by free text
    pub async fn user_by_search(&self, text: &str, perpage: Option<u32>) -> Vec<Profile> {
        self.api_client
            .user_by_search(text, perpage)
            .await
            .unwrap_or_else(|e| {
                error!("user search for {:?} failed: {}", text, e);
                Vec::new()
            })
    }

    /// Get a user's video categories
    pub async fn profile_categories(&self, username: &str) -> Vec<Category> {
        self.api_client
            .profile_categories(username)
            .await
            .unwrap_or_else(|e| {
                error!("category listing for {} failed: {}", username, e);
                Vec::new()
            })
    }

    /// Get a single video by its hash
    pub async fn video(&self, video_hash: &str) -> Option<Video> {
        self.api_client.video(video_hash).await.unwrap_or_else(|e| {
            error!("video lookup for {} failed: {}", video_hash, e);
            None
        })
    }

    /// List videos in a category
    pub async fn category_video(&self, cat: u32, perpage: Option<u32>) -> Vec<Video> {
        self.api_client
            .category_video(cat, perpage)
            .await
            .unwrap_or_else(|e| {
                error!("category {} listing failed: {}", cat, e);
                Vec::new()
            })
    }

    /// List a user's videos
    pub async fn video_by_user(&self, username: &str, perpage: Option<u32>) -> Vec<Video> {
        self.api_client
            .video_by_user(username, perpage)
            .await
            .unwrap_or_else(|e| {
                error!("video listing for {} failed: {}", username, e);
                Vec::new()
            })
    }

    /// List comments on a video
    pub async fn comment_by_videos(&self, video_hash: &str, perpage: Option<u32>) -> Vec<Comment> {
        self.api_client
            .comment_by_videos(video_hash, perpage)
            .await
            .unwrap_or_else(|e| {
                error!("comment listing for {} failed: {}", video_hash, e);
                Vec::new()
            })
    }

    /// Search videos by free text
    pub async fn video_by_search(&self, text: &str, perpage: Option<u32>) -> Vec<Video> {
        self.api_client
            .video_by_search(text, perpage)
            .await
            .unwrap_or_else(|e| {
                error!("video search for {:?} failed: {}", text, e);
                Vec::new()
            })
    }

    /// List videos carrying a tag
    pub async fn video_by_tag(&self, text: &str) -> Vec<Video> {
        self.api_client.video_by_tag(text).await.unwrap_or_else(|e| {
            error!("tag listing for {:?} failed: {}", text, e);
            Vec::new()
        })
    }

    /// Fetch the upload descriptor for an authenticated user
    pub async fn upload_form(&self, username: &str, ltoken: &str) -> Option<UploadForm> {
        self.api_client
            .upload_form(username, ltoken)
            .await
            .unwrap_or_else(|e| {
                error!("upload form fetch for {} failed: {}", username, e);
                None
            })
    }

    /// Publish a video file, returning the created video's full entity.
    ///
    /// Unlike the read operations this one propagates its error: the caller
    /// must be told the write may have failed.
    pub async fn upload_post(
        &self,
        video_path: impl AsRef<Path>,
        title: &str,
        category: u32,
        form: &UploadForm,
        options: &UploadOptions,
    ) -> Result<Video> {
        self.api_client
            .upload_post(video_path, title, category, form, options)
            .await
    }
}

impl Default for Aparat {
    fn default() -> Self {
        Self::new()
    }
}
