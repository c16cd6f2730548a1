use std::ops::Deref;

use profile_editor_sdk::{ProfileLinks, ProfileUpdate, UserId, UserProfile};
use serde::{Deserialize, Serialize};

/// Editable copy of a user's profile.
///
/// Lives only as long as the editing session. Fields hold raw user input;
/// nothing here is guaranteed valid until [`crate::validate`] returns a
/// [`ValidDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: String,
    pub bio: Option<String>,
    pub background_url: String,
    pub avatar_url: String,
    pub border_color: Option<String>,
    pub links: ProfileLinks,
}

impl ProfileDraft {
    /// Start a draft from the persisted profile.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            background_url: profile.background_image.clone().unwrap_or_default(),
            avatar_url: profile.image.clone(),
            border_color: profile.border_color.clone(),
            links: profile.links.clone(),
        }
    }

    /// Current value of a link input; unset links read as empty.
    #[must_use]
    pub fn link(&self, key: &str) -> &str {
        self.links.get(key).map_or("", String::as_str)
    }

    /// Store a link input as typed. Empty values are kept here and dropped at validation.
    pub fn set_link(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.links.insert(key.into(), value.into());
    }
}

/// A draft that satisfied every schema rule, with empty links removed.
///
/// Only [`crate::validate`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft(ProfileDraft);

impl ValidDraft {
    pub(crate) fn new(draft: ProfileDraft) -> Self {
        Self(draft)
    }

    #[must_use]
    pub fn into_inner(self) -> ProfileDraft {
        self.0
    }

    /// Build the update command for `user_id`. An empty bio is sent as "no bio".
    #[must_use]
    pub fn to_update(&self, user_id: UserId) -> ProfileUpdate {
        let draft = &self.0;
        ProfileUpdate {
            user_id,
            name: draft.name.clone(),
            image: draft.avatar_url.clone(),
            bio: draft.bio.clone().filter(|bio| !bio.is_empty()),
            background_image: draft.background_url.clone(),
            border_color: draft.border_color.clone(),
            links: draft.links.clone(),
        }
    }
}

impl Deref for ValidDraft {
    type Target = ProfileDraft;

    fn deref(&self) -> &ProfileDraft {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_profile_maps_missing_background_to_empty() {
        let profile = UserProfile {
            name: "Alice".to_owned(),
            image: "https://x.com/b.png".to_owned(),
            username: Some("alice".to_owned()),
            ..UserProfile::default()
        };

        let draft = ProfileDraft::from_profile(&profile);

        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.avatar_url, "https://x.com/b.png");
        assert_eq!(draft.background_url, "");
        assert!(draft.bio.is_none());
    }

    #[test]
    fn unset_link_reads_as_empty() {
        let mut draft = ProfileDraft::default();
        assert_eq!(draft.link("github"), "");

        draft.set_link("github", "https://github.com/alice");
        assert_eq!(draft.link("github"), "https://github.com/alice");
    }

    #[test]
    fn to_update_sends_empty_bio_as_none() {
        let valid = ValidDraft::new(ProfileDraft {
            name: "Alice".to_owned(),
            bio: Some(String::new()),
            background_url: "https://x.com/a.png".to_owned(),
            avatar_url: "https://x.com/b.png".to_owned(),
            border_color: Some("#ff00aa".to_owned()),
            links: ProfileLinks::new(),
        });

        let update = valid.to_update(UserId::new("u1"));

        assert_eq!(update.bio, None);
        assert_eq!(update.image, "https://x.com/b.png");
        assert_eq!(update.background_image, "https://x.com/a.png");
        assert_eq!(update.border_color.as_deref(), Some("#ff00aa"));
    }

    #[test]
    fn to_update_keeps_non_empty_bio() {
        let valid = ValidDraft::new(ProfileDraft {
            bio: Some("hello".to_owned()),
            ..ProfileDraft::default()
        });

        assert_eq!(valid.to_update(UserId::new("u1")).bio.as_deref(), Some("hello"));
    }
}
