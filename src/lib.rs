//! # aparat-rs
//!
//! Typed async client for the Aparat video platform REST API: login,
//! profile and video lookup, search, and multipart video upload.
//!
//! ## Basic usage
//!
//! Read operations through the [`Aparat`] facade resolve to the documented
//! default values (`None` for single entities, an empty `Vec` for listings)
//! on any failure:
//!
//! ```no_run
//! use aparat_rs::Aparat;
//!
//! # async fn run() {
//! let aparat = Aparat::new();
//! if let Some(video) = aparat.video("gHy5t").await {
//!     println!("{:?}", video.title);
//! }
//! let results = aparat.video_by_search("crab", None).await;
//! # }
//! ```
//!
//! Callers that need to tell a transport failure apart from an empty result
//! use [`AparatApiClient`] directly; its operations return `Result`s.
//!
//! ## Uploading
//!
//! Publishing a video composes login, the server-issued upload form, a
//! multipart POST of the streamed file, and a follow-up lookup of the
//! created video:
//!
//! ```no_run
//! use aparat_rs::{Aparat, UploadOptions};
//!
//! # async fn run() -> aparat_rs::Result<()> {
//! let aparat = Aparat::new();
//! let login = aparat.login("user", "secret").await.expect("login rejected");
//! let token = login.ltoken.expect("no session token");
//! let form = aparat
//!     .upload_form("user", &token)
//!     .await
//!     .expect("no upload form issued");
//!
//! let options = UploadOptions {
//!     tags: Some(vec!["crab".into(), "rust".into()]),
//!     ..Default::default()
//! };
//! let video = aparat
//!     .upload_post("clip.mp4", "My clip", 14, &form, &options)
//!     .await?;
//! println!("published as {:?}", video.uid);
//! # Ok(())
//! # }
//! ```

// Re-export main public types
pub use aparat_api::{Aparat, AparatApiClient, ApiError, HttpError, Result, DEFAULT_BASE_URL};
pub use aparat_core::{
    password_token, Category, Comment, LoginInfo, Profile, UploadForm, UploadOptions,
    UploadReceipt, Video,
};
