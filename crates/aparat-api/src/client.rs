use crate::endpoints;
use crate::errors::{HttpError, Result};
use aparat_core::auth::password_token;
use aparat_core::models::{
    Category, CategoryVideosEnvelope, Comment, CommentByVideosEnvelope, LoginEnvelope, LoginInfo,
    Profile, ProfileCategoriesEnvelope, ProfileEnvelope, UploadForm, UploadFormEnvelope,
    UserBySearchEnvelope, Video, VideoBySearchEnvelope, VideoByTagEnvelope, VideoByUserEnvelope,
    VideoEnvelope,
};
use log::{debug, error, info};
use reqwest::{Client, Response, StatusCode};

/// Base path every fixed-path operation resolves against. Uploads are the
/// exception: they POST to the server-assigned `formAction` URL instead.
pub const DEFAULT_BASE_URL: &str = "https://www.aparat.com/etc/api/";

/// HTTP client for the Aparat REST API.
///
/// Read operations return `Ok(None)` / `Ok(vec![])` when the response
/// envelope carries no payload and `Err` for transport, status or decode
/// failures. Callers that want the classic collapse-to-empty contract use
/// [`Aparat`](crate::sdk::Aparat) instead.
///
/// The client holds no session state: credentials go in per call and tokens
/// come back to the caller, so a single instance is safe to share across
/// concurrent lookups.
#[derive(Debug, Clone)]
pub struct AparatApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl AparatApiClient {
    /// Create a new API client
    pub fn new(base_url: Option<String>) -> Self {
        let client = Client::new();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        debug!("Creating AparatApiClient for {}", base_url);

        Self { client, base_url }
    }

    /// Create an API client on a caller-configured transport.
    ///
    /// Timeouts, proxies and similar policy live on the `reqwest::Client`;
    /// this crate adds none of its own.
    pub fn with_http_client(client: Client, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { client, base_url }
    }

    /// Base URL this client resolves fixed-path operations against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request against the fixed base path
    async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        debug!("HTTP GET request to: {}", redact_credentials(&url));

        let response = self.client.get(&url).send().await.map_err(|e| {
            let e = e.without_url();
            error!(
                "GET request failed for {}: {:?}",
                redact_credentials(&url),
                e
            );
            HttpError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(response).await
    }

    /// Handle HTTP response and convert errors
    pub(crate) async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("Request failed with status: {}", status);
        debug!("Error response body: {}", error_text);

        let api_error = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => HttpError::AuthenticationFailed,
            StatusCode::TOO_MANY_REQUESTS => HttpError::RateLimited,
            StatusCode::SERVICE_UNAVAILABLE => HttpError::ServiceUnavailable,
            _ => HttpError::Status {
                status: status.as_u16(),
                message: error_text,
            },
        };

        Err(api_error.into())
    }

    /// Log in and return the session payload, or `Ok(None)` when the service
    /// rejects the credentials.
    ///
    /// The raw password is hashed into the fixed derived token before it
    /// goes on the wire and is not retained.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<LoginInfo>> {
        let token = password_token(password);

        debug!("Logging in as {}", username);
        let response = self.get(&endpoints::login(username, &token)).await?;
        let envelope: LoginEnvelope = response.json().await.map_err(request_error)?;

        Ok(envelope.login)
    }

    /// Get a profile by username
    pub async fn profile(&self, username: &str) -> Result<Option<Profile>> {
        debug!("Fetching profile for {}", username);
        let response = self.get(&endpoints::profile(username)).await?;
        let envelope: ProfileEnvelope = response.json().await.map_err(request_error)?;

        Ok(envelope.profile)
    }

    /// Search users by free text
    pub async fn user_by_search(&self, text: &str, perpage: Option<u32>) -> Result<Vec<Profile>> {
        debug!("Searching users for {:?}", text);
        let response = self.get(&endpoints::user_by_search(text, perpage)).await?;
        let envelope: UserBySearchEnvelope = response.json().await.map_err(request_error)?;
        let users = envelope.userbysearch.unwrap_or_default();

        info!("User search returned {} results", users.len());

        Ok(users)
    }

    /// Get a user's video categories
    pub async fn profile_categories(&self, username: &str) -> Result<Vec<Category>> {
        debug!("Fetching profile categories for {}", username);
        let response = self.get(&endpoints::profile_categories(username)).await?;
        let envelope: ProfileCategoriesEnvelope =
            response.json().await.map_err(request_error)?;
        let categories = envelope.profilecategories.unwrap_or_default();

        info!("Fetched {} categories for {}", categories.len(), username);

        Ok(categories)
    }

    /// Get a single video by its hash
    pub async fn video(&self, video_hash: &str) -> Result<Option<Video>> {
        debug!("Fetching video {}", video_hash);
        let response = self.get(&endpoints::video(video_hash)).await?;
        let envelope: VideoEnvelope = response.json().await.map_err(request_error)?;

        Ok(envelope.video)
    }

    /// List videos in a category
    pub async fn category_video(&self, cat: u32, perpage: Option<u32>) -> Result<Vec<Video>> {
        debug!("Fetching videos in category {}", cat);
        let response = self.get(&endpoints::category_video(cat, perpage)).await?;
        let envelope: CategoryVideosEnvelope =
            response.json().await.map_err(request_error)?;
        let videos = envelope.categoryvideos.unwrap_or_default();

        info!("Fetched {} videos in category {}", videos.len(), cat);

        Ok(videos)
    }

    /// List a user's videos
    pub async fn video_by_user(&self, username: &str, perpage: Option<u32>) -> Result<Vec<Video>> {
        debug!("Fetching videos for {}", username);
        let response = self.get(&endpoints::video_by_user(username, perpage)).await?;
        let envelope: VideoByUserEnvelope = response.json().await.map_err(request_error)?;
        let videos = envelope.videobyuser.unwrap_or_default();

        info!("Fetched {} videos for {}", videos.len(), username);

        Ok(videos)
    }

    /// List comments on a video
    pub async fn comment_by_videos(
        &self,
        video_hash: &str,
        perpage: Option<u32>,
    ) -> Result<Vec<Comment>> {
        debug!("Fetching comments for video {}", video_hash);
        let response = self
            .get(&endpoints::comment_by_videos(video_hash, perpage))
            .await?;
        let envelope: CommentByVideosEnvelope =
            response.json().await.map_err(request_error)?;
        let comments = envelope.commentbyvideos.unwrap_or_default();

        info!("Fetched {} comments for video {}", comments.len(), video_hash);

        Ok(comments)
    }

    /// Search videos by free text
    pub async fn video_by_search(&self, text: &str, perpage: Option<u32>) -> Result<Vec<Video>> {
        debug!("Searching videos for {:?}", text);
        let response = self.get(&endpoints::video_by_search(text, perpage)).await?;
        let envelope: VideoBySearchEnvelope =
            response.json().await.map_err(request_error)?;
        let videos = envelope.videobysearch.unwrap_or_default();

        info!("Video search returned {} results", videos.len());

        Ok(videos)
    }

    /// List videos carrying a tag
    pub async fn video_by_tag(&self, text: &str) -> Result<Vec<Video>> {
        debug!("Fetching videos tagged {:?}", text);
        let response = self.get(&endpoints::video_by_tag(text)).await?;
        let envelope: VideoByTagEnvelope = response.json().await.map_err(request_error)?;
        let videos = envelope.videobytag.unwrap_or_default();

        info!("Fetched {} videos tagged {:?}", videos.len(), text);

        Ok(videos)
    }

    /// Fetch the server-issued upload descriptor for an authenticated user.
    ///
    /// Requires the `ltoken` the login payload carried; the descriptor names
    /// the submission URL the upload POST must target.
    pub async fn upload_form(&self, username: &str, ltoken: &str) -> Result<Option<UploadForm>> {
        debug!("Fetching upload form for {}", username);
        let response = self.get(&endpoints::upload_form(username, ltoken)).await?;
        let envelope: UploadFormEnvelope = response.json().await.map_err(request_error)?;

        Ok(envelope.uploadform)
    }
}

/// Mask credential values in a URL before it reaches a log line.
///
/// `lpass` carries the derived password token and `ltoken` the session
/// token; the path segment following either key is replaced, everything
/// else passes through untouched.
fn redact_credentials(url: &str) -> String {
    let mut segments = Vec::new();
    let mut mask_next = false;
    for segment in url.split('/') {
        if mask_next {
            segments.push("***");
            mask_next = false;
        } else {
            segments.push(segment);
            mask_next = matches!(segment, "lpass" | "ltoken");
        }
    }
    segments.join("/")
}

/// Wrap a transport error with its URL stripped. Login and upload-form URLs
/// embed credential segments, so the URL never rides along inside an error
/// that callers may display or log.
pub(crate) fn request_error(e: reqwest::Error) -> HttpError {
    HttpError::Request(e.without_url())
}

// TODO: pin the commentByVideos envelope key against the live API and drop the alias
