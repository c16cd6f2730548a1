//! Wire shapes of the profile endpoints.

use std::collections::BTreeMap;

use profile_editor_sdk::{ProfileLinks, ProfileUpdate, UserProfile};
use serde::{Deserialize, Serialize};

/// Body of the read endpoint. Every field is tolerated missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfileDto {
    name: Option<String>,
    image: Option<String>,
    background_image: Option<String>,
    bio: Option<String>,
    username: Option<String>,
    border_color: Option<String>,
    links: Option<BTreeMap<String, Option<String>>>,
}

impl From<UserProfileDto> for UserProfile {
    fn from(dto: UserProfileDto) -> Self {
        let links: ProfileLinks = dto
            .links
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, url)| url.map(|url| (key, url)))
            .collect();

        Self {
            name: dto.name.unwrap_or_default(),
            image: dto.image.unwrap_or_default(),
            background_image: dto.background_image,
            bio: dto.bio,
            username: dto.username,
            border_color: dto.border_color,
            links,
        }
    }
}

/// Body of the update endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequestDto<'a> {
    user_id: &'a str,
    new_name: &'a str,
    new_image: &'a str,
    new_bio: Option<&'a str>,
    new_background_image: &'a str,
    new_border_color: Option<&'a str>,
    new_links: &'a ProfileLinks,
}

impl<'a> From<&'a ProfileUpdate> for UpdateProfileRequestDto<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            user_id: update.user_id.as_str(),
            new_name: &update.name,
            new_image: &update.image,
            new_bio: update.bio.as_deref(),
            new_background_image: &update.background_image,
            new_border_color: update.border_color.as_deref(),
            new_links: &update.links,
        }
    }
}

/// `{ "message": ... }` envelope used by both endpoints on success and failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MessageDto {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_editor_sdk::UserId;
    use serde_json::json;

    #[test]
    fn update_payload_uses_wire_names_and_null_bio() {
        let update = ProfileUpdate {
            user_id: UserId::new("u1"),
            name: "Alice".to_owned(),
            image: "https://x.com/b.png".to_owned(),
            bio: None,
            background_image: "https://x.com/a.png".to_owned(),
            border_color: Some("#fff".to_owned()),
            links: ProfileLinks::new(),
        };

        let value = serde_json::to_value(UpdateProfileRequestDto::from(&update)).unwrap();

        assert_eq!(
            value,
            json!({
                "userId": "u1",
                "newName": "Alice",
                "newImage": "https://x.com/b.png",
                "newBio": null,
                "newBackgroundImage": "https://x.com/a.png",
                "newBorderColor": "#fff",
                "newLinks": {}
            })
        );
    }

    #[test]
    fn profile_body_tolerates_nulls() {
        let dto: UserProfileDto = serde_json::from_value(json!({
            "name": "Alice",
            "image": "https://x.com/b.png",
            "bio": null,
            "username": "alice",
            "borderColor": "#123456",
            "links": { "github": "https://github.com/alice", "twitter": null }
        }))
        .unwrap();

        let profile = UserProfile::from(dto);

        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.bio, None);
        assert_eq!(profile.border_color.as_deref(), Some("#123456"));
        assert_eq!(profile.links.len(), 1);
        assert!(profile.background_image.is_none());
    }
}
