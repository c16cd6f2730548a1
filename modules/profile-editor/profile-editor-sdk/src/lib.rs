//! Profile Editor SDK
//!
//! This crate provides the public contract of the `profile-editor` module:
//!
//! - [`ProfileApiClient`] - Trait over the "read user profile" and "update user profile" endpoints
//! - [`UserId`], [`UserProfile`], [`ProfileUpdate`] - Transport-agnostic models
//! - [`ProfileApiError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use profile_editor_sdk::{ProfileApiClient, UserId};
//!
//! let profile = client.get_profile(&UserId::new("42")).await?;
//! println!("{}", profile.name);
//! ```

pub mod api;
pub mod error;
pub mod models;

pub use api::ProfileApiClient;
pub use error::ProfileApiError;
pub use models::{KNOWN_LINK_KEYS, ProfileLinks, ProfileUpdate, UserId, UserProfile};
