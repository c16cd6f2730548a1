use profile_editor_sdk::ProfileApiError;

/// First schema rule a draft violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    /// Field path, e.g. `name` or `links.github`.
    pub field: String,
    /// Display message.
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Why saving a profile failed. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("You must be signed in to update your profile")]
    Unauthenticated,

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Error: {message}")]
    Submit { status: u16, message: String },

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected { detail: String },
}

impl From<ProfileApiError> for SaveError {
    fn from(e: ProfileApiError) -> Self {
        match e {
            ProfileApiError::Rejected { status, message } => Self::Submit { status, message },
            other @ (ProfileApiError::Transport(_) | ProfileApiError::InvalidResponse(_)) => {
                Self::Unexpected {
                    detail: other.to_string(),
                }
            }
        }
    }
}

/// Why loading a profile failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("You must be signed in to edit your profile")]
    Unauthenticated,

    /// Server message, shown verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("An unexpected error occurred while loading your profile")]
    Unexpected { detail: String },
}

impl From<ProfileApiError> for LoadError {
    fn from(e: ProfileApiError) -> Self {
        match e {
            ProfileApiError::Rejected { status, message } => Self::Rejected { status, message },
            other @ (ProfileApiError::Transport(_) | ProfileApiError::InvalidResponse(_)) => {
                Self::Unexpected {
                    detail: other.to_string(),
                }
            }
        }
    }
}
