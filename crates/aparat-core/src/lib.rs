//! # Aparat Core
//!
//! Core domain types for the Aparat API client.
//!
//! This crate contains pure data and logic with no I/O dependencies:
//! - Entity models and the per-operation response envelopes
//! - Password token derivation for login

pub mod auth;
pub mod models;

// Re-export commonly used types
pub use auth::password_token;
pub use models::{
    Category, Comment, LoginInfo, Profile, UploadForm, UploadOptions, UploadReceipt, Video,
};
