use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// The API is loosely documented and returns most scalars as strings, so
// entity fields are optional strings with a catch-all for everything else.
// Successful responses are trusted as-is; nothing here validates them.

/// A video as returned by the lookup and listing operations.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Video {
    /// Video hash, the identifier every video operation keys on.
    pub uid: Option<String>,
    pub title: Option<String>,
    pub username: Option<String>,
    pub visit_cnt: Option<String>,
    pub sdate: Option<String>,
    pub duration: Option<String>,
    pub frame: Option<String>,
    pub small_poster: Option<String>,
    pub big_poster: Option<String>,
    pub official: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

/// A user profile, also the item shape of user-search results.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Profile {
    pub username: Option<String>,
    pub name: Option<String>,
    pub pic_s: Option<String>,
    pub pic_m: Option<String>,
    pub pic_b: Option<String>,
    pub url: Option<String>,
    pub video_cnt: Option<String>,
    pub follower_cnt: Option<String>,
    pub followed_cnt: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

/// One of a user's video categories.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub id: Option<String>,
    pub name: Option<String>,
    pub video_cnt: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A comment on a video.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Comment {
    pub id: Option<String>,
    pub body: Option<String>,
    pub username: Option<String>,
    pub name: Option<String>,
    pub sdate: Option<String>,
    pub reply: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Payload of a successful login.
///
/// `ltoken` is the session token; the client never stores it, the caller
/// passes it back explicitly to privileged operations such as `uploadForm`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoginInfo {
    #[serde(rename = "type")]
    pub status: Option<String>,
    pub ltoken: Option<String>,
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Server-issued upload descriptor obtained from `uploadForm`.
///
/// `form_action` is the server-assigned submission URL the upload POST
/// targets instead of the fixed base path. Single-use by convention.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadForm {
    pub frm_id: String,
    #[serde(rename = "formAction")]
    pub form_action: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Acknowledgment body of a successful upload POST.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadReceipt {
    /// Hash of the freshly created video, used for the follow-up lookup.
    pub uid: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Optional upload fields.
///
/// `None` fields are omitted from the multipart body entirely; the server
/// distinguishes an omitted field from an empty value, so absence is never
/// transmitted as an empty string.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Joined with commas into a single `data[tags]` field.
    pub tags: Option<Vec<String>>,
    pub allow_comment: Option<bool>,
    pub description: Option<String>,
    pub video_pass: Option<String>,
}

// Response envelopes. The API nests every payload under an operation-specific
// lowercase key; a missing key and an explicit null both decode to the empty
// sentinel, which is exactly how callers are meant to treat them.

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginEnvelope {
    pub login: Option<LoginInfo>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileEnvelope {
    pub profile: Option<Profile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserBySearchEnvelope {
    pub userbysearch: Option<Vec<Profile>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileCategoriesEnvelope {
    pub profilecategories: Option<Vec<Category>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VideoEnvelope {
    pub video: Option<Video>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryVideosEnvelope {
    pub categoryvideos: Option<Vec<Video>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VideoByUserEnvelope {
    pub videobyuser: Option<Vec<Video>>,
}

/// Envelope for `commentByVideos`.
///
/// The live API has been seen nesting this list under `videobyuser` instead
/// of the scheme-consistent key; the alias accepts either until the server
/// behavior is pinned down.
#[derive(Debug, Deserialize, Serialize)]
pub struct CommentByVideosEnvelope {
    #[serde(alias = "videobyuser")]
    pub commentbyvideos: Option<Vec<Comment>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VideoBySearchEnvelope {
    pub videobysearch: Option<Vec<Video>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VideoByTagEnvelope {
    pub videobytag: Option<Vec<Video>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UploadFormEnvelope {
    pub uploadform: Option<UploadForm>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UploadPostEnvelope {
    pub uploadpost: Option<UploadReceipt>,
}
