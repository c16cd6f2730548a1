//! Public models for the profile editor module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the profile editor and the profile backend. Wire field names
//! (`newName`, `borderColor`, ...) live in the HTTP adapter, not here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Link key to URL mapping. Ordered so iteration (and error reporting) is deterministic.
pub type ProfileLinks = BTreeMap<String, String>;

/// Link keys a profile form exposes as inputs, in display order.
///
/// The data model accepts any key; this list only drives UI bindings.
pub const KNOWN_LINK_KEYS: [&str; 7] = [
    "website",
    "github",
    "twitter",
    "instagram",
    "youtube",
    "tiktok",
    "spotify",
];

/// Identifier of the authenticated user, as handed out by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted user profile as returned by the read endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Avatar image URL.
    pub image: String,
    pub background_image: Option<String>,
    pub bio: Option<String>,
    /// Read-only here; a missing username means the public profile cannot be viewed.
    pub username: Option<String>,
    pub border_color: Option<String>,
    pub links: ProfileLinks,
}

/// Full replacement of the editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub user_id: UserId,
    pub name: String,
    pub image: String,
    /// `None` clears the bio.
    pub bio: Option<String>,
    pub background_image: String,
    pub border_color: Option<String>,
    pub links: ProfileLinks,
}
