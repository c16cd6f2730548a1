//! Profile editor module.
//!
//! Validates a [`ProfileDraft`] against the profile schema and submits it to the
//! profile backend. The core is the pure pair [`validate`] / [`ProfileService::submit`];
//! [`ProfileForm`] is a thin stateful binding (notice + saving flag) usable from
//! any UI layer.
//!
//! ```ignore
//! use profile_editor::{ProfileEditorConfig, ProfileForm, ProfileService};
//!
//! let config = ProfileEditorConfig::load(None)?;
//! let service = ProfileService::new(config.build_client()?);
//! let mut form = ProfileForm::load(service, Some(user_id)).await?;
//! form.draft_mut().name = "Alice".to_owned();
//! form.handle_save_changes().await;
//! ```

pub mod config;
pub mod domain;
pub mod infra;

pub use config::{ConfigError, HttpSettings, ProfileEditorConfig};
pub use domain::draft::{ProfileDraft, ValidDraft};
pub use domain::error::{FieldError, LoadError, SaveError};
pub use domain::form::{Notice, ProfileForm, SavingIndicator};
pub use domain::service::ProfileService;
pub use domain::validation::{clean_links, validate};
pub use infra::HttpProfileClient;
