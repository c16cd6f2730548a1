use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use profile_editor_sdk::{UserId, UserProfile};

use super::draft::ProfileDraft;
use super::error::LoadError;
use super::service::ProfileService;
use super::validation::clean_links;

/// The single message a form shows after a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Shared view of a form's "saving" state.
///
/// Clones observe the same flag, so a UI task can poll it while
/// [`ProfileForm::handle_save_changes`] is in flight on another task.
#[derive(Debug, Clone, Default)]
pub struct SavingIndicator(Arc<AtomicBool>);

impl SavingIndicator {
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn begin(&self) -> SavingGuard<'_> {
        self.0.store(true, Ordering::Release);
        SavingGuard(self)
    }
}

/// Clears the indicator when the save finishes or its future is dropped.
struct SavingGuard<'a>(&'a SavingIndicator);

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::Release);
    }
}

/// "Customize Profile" form state.
///
/// Owns the draft being edited, the read-only username, the last notice and a
/// `saving` indicator. `handle_save_changes` takes `&mut self`, so one form
/// cannot overlap its own saves; separate forms for the same user can, and the
/// last response to arrive wins.
pub struct ProfileForm {
    service: ProfileService,
    user_id: Option<UserId>,
    username: Option<String>,
    baseline: ProfileDraft,
    draft: ProfileDraft,
    notice: Option<Notice>,
    saving: SavingIndicator,
}

impl ProfileForm {
    /// Build a form around an already fetched profile.
    #[must_use]
    pub fn new(service: ProfileService, user_id: Option<UserId>, profile: &UserProfile) -> Self {
        let draft = ProfileDraft::from_profile(profile);
        Self {
            service,
            user_id,
            username: profile.username.clone(),
            baseline: draft.clone(),
            draft,
            notice: None,
            saving: SavingIndicator::default(),
        }
    }

    /// Fetch the signed-in user's profile and open a form on it.
    ///
    /// # Errors
    ///
    /// Propagates [`LoadError`] from [`ProfileService::load`].
    pub async fn load(service: ProfileService, user_id: Option<UserId>) -> Result<Self, LoadError> {
        let profile = service.load(user_id.as_ref()).await?;
        Ok(Self::new(service, user_id, &profile))
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Path of the public profile page, or `None` when the user has no username yet.
    #[must_use]
    pub fn public_profile_path(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| format!("/{name}"))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving.is_saving()
    }

    /// Handle for observing the saving state from outside the form.
    #[must_use]
    pub fn saving_indicator(&self) -> SavingIndicator {
        self.saving.clone()
    }

    /// Whether the draft differs from the last loaded or saved state, ignoring empty links.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        let normalize = |draft: &ProfileDraft| ProfileDraft {
            links: clean_links(&draft.links),
            ..draft.clone()
        };
        normalize(&self.draft) != normalize(&self.baseline)
    }

    /// Validate and submit the draft, leaving exactly one notice behind.
    ///
    /// Clears the previous notice, then authenticates, validates and submits.
    /// Every failure is turned into an error notice; nothing propagates.
    /// [`saving_indicator`](Self::saving_indicator) reads `true` while the
    /// request is in flight.
    pub async fn handle_save_changes(&mut self) -> &Notice {
        self.notice = None;

        let outcome = {
            let _saving = self.saving.begin();
            self.service.save(&self.draft, self.user_id.as_ref()).await
        };

        let notice = match outcome {
            Ok(saved) => {
                self.baseline = saved.draft.into_inner();
                Notice::Success(saved.message)
            }
            Err(err) => Notice::Error(err.to_string()),
        };
        self.notice.insert(notice)
    }
}
