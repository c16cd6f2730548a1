use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use profile_editor_sdk::{
    ProfileApiClient, ProfileApiError, ProfileLinks, ProfileUpdate, UserId, UserProfile,
};

use super::draft::ProfileDraft;
use super::service::ProfileService;

/// Mock backend recording every call.
pub struct MockApiClient {
    pub profile: Result<UserProfile, ProfileApiError>,
    pub update_result: Result<String, ProfileApiError>,
    pub get_calls: Mutex<Vec<UserId>>,
    pub updates: Mutex<Vec<ProfileUpdate>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self {
            profile: Ok(sample_profile()),
            update_result: Ok("Profile updated successfully".to_owned()),
            get_calls: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn with_update_result(mut self, result: Result<String, ProfileApiError>) -> Self {
        self.update_result = result;
        self
    }

    pub fn with_profile(mut self, profile: Result<UserProfile, ProfileApiError>) -> Self {
        self.profile = profile;
        self
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub fn last_update(&self) -> Option<ProfileUpdate> {
        self.updates.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ProfileApiClient for MockApiClient {
    async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, ProfileApiError> {
        self.get_calls.lock().unwrap().push(user_id.clone());
        self.profile.clone()
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<String, ProfileApiError> {
        self.updates.lock().unwrap().push(update.clone());
        self.update_result.clone()
    }
}

pub fn service_with(mock: &Arc<MockApiClient>) -> ProfileService {
    ProfileService::new(mock.clone())
}

pub fn sample_profile() -> UserProfile {
    let mut links = ProfileLinks::new();
    links.insert("github".to_owned(), "https://github.com/alice".to_owned());
    UserProfile {
        name: "Alice".to_owned(),
        image: "https://x.com/b.png".to_owned(),
        background_image: Some("https://x.com/a.png".to_owned()),
        bio: Some("Rustacean".to_owned()),
        username: Some("alice".to_owned()),
        border_color: Some("#112233".to_owned()),
        links,
    }
}

pub fn alice_draft() -> ProfileDraft {
    ProfileDraft {
        name: "Alice".to_owned(),
        bio: Some(String::new()),
        background_url: "https://x.com/a.png".to_owned(),
        avatar_url: "https://x.com/b.png".to_owned(),
        border_color: None,
        links: ProfileLinks::new(),
    }
}
