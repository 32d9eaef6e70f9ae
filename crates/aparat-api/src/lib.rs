//! # Aparat API
//!
//! HTTP client for the Aparat video platform's REST API.
//! This crate provides typed async operations for login, profile and video
//! lookup, search, and multipart video upload.
//!
//! Two surfaces over the same operations:
//! - [`AparatApiClient`] returns `Result`s, so transport and decode failures
//!   stay distinguishable from an empty result.
//! - [`Aparat`] collapses read failures into the documented default values
//!   (`None` / empty `Vec`), logging the cause instead of raising it.

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod sdk;

mod upload;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export common types for convenience
pub use client::*;
pub use errors::*;
pub use sdk::*;

// Re-export core types that API consumers will need
pub use aparat_core::{
    password_token, Category, Comment, LoginInfo, Profile, UploadForm, UploadOptions,
    UploadReceipt, Video,
};
