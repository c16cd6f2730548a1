use async_trait::async_trait;

use crate::error::ProfileApiError;
use crate::models::{ProfileUpdate, UserId, UserProfile};

/// Client for the profile backend.
///
/// Implementations issue exactly one request per call: no retries and no
/// idempotency key, so calling `update_profile` twice sends two updates.
#[async_trait]
pub trait ProfileApiClient: Send + Sync {
    /// Fetch the persisted profile of `user_id`.
    async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, ProfileApiError>;

    /// Replace the editable profile fields. Returns the server confirmation message.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<String, ProfileApiError>;
}
