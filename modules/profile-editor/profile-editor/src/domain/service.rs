use std::sync::Arc;

use profile_editor_sdk::{ProfileApiClient, UserId, UserProfile};
use tracing::instrument;

use super::draft::{ProfileDraft, ValidDraft};
use super::error::{LoadError, SaveError};
use super::validation::validate;

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    /// Server confirmation message.
    pub message: String,
    /// The draft as it was submitted (links cleaned).
    pub draft: ValidDraft,
}

/// Loads profiles and submits validated drafts.
///
/// Stateless apart from the backend client; every call takes the draft and the
/// session's user id explicitly.
#[derive(Clone)]
pub struct ProfileService {
    client: Arc<dyn ProfileApiClient>,
}

impl ProfileService {
    #[must_use]
    pub fn new(client: Arc<dyn ProfileApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the persisted profile of the signed-in user.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a user id; otherwise the backend failure.
    #[instrument(skip_all, fields(user_id = user_id.map_or("", UserId::as_str)))]
    pub async fn load(&self, user_id: Option<&UserId>) -> Result<UserProfile, LoadError> {
        let user_id = user_id.ok_or(LoadError::Unauthenticated)?;
        let profile = self.client.get_profile(user_id).await.map_err(|e| {
            tracing::warn!(error = %e, "failed to load profile");
            LoadError::from(e)
        })?;
        tracing::debug!("profile loaded");
        Ok(profile)
    }

    /// Submit an already validated draft. Sends exactly one update request.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` (no request is made) when `user_id` is `None`,
    /// `Submit` when the backend rejects the update, `Unexpected` on transport failure.
    #[instrument(skip_all, fields(user_id = user_id.map_or("", UserId::as_str)))]
    pub async fn submit(
        &self,
        draft: &ValidDraft,
        user_id: Option<&UserId>,
    ) -> Result<String, SaveError> {
        let user_id = user_id.ok_or(SaveError::Unauthenticated)?;
        let update = draft.to_update(user_id.clone());

        match self.client.update_profile(&update).await {
            Ok(message) => {
                tracing::info!(links = update.links.len(), "profile updated");
                Ok(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile update failed");
                Err(SaveError::from(e))
            }
        }
    }

    /// Authenticate, validate and submit `draft`.
    ///
    /// The user id check runs first, so a signed-out caller never reaches
    /// validation or the network.
    ///
    /// # Errors
    ///
    /// The first failure among `Unauthenticated`, `Field`, `Submit`, `Unexpected`.
    pub async fn save(
        &self,
        draft: &ProfileDraft,
        user_id: Option<&UserId>,
    ) -> Result<Saved, SaveError> {
        let Some(user_id) = user_id else {
            tracing::debug!("save refused: no signed-in user");
            return Err(SaveError::Unauthenticated);
        };
        let valid = validate(draft)?;
        let message = self.submit(&valid, Some(user_id)).await?;
        Ok(Saved {
            message,
            draft: valid,
        })
    }
}
