//! Outbound HTTP for the profile editor.
//!
//! A pooled hyper client over rustls. `https://` is required unless the client
//! is built with [`TransportSecurity::AllowInsecureHttp`]. Bodies are read with a
//! size cap; a timeout applies only when one is configured.
//!
//! Each [`RequestBuilder::send`] issues exactly one request. Profile updates are
//! not idempotent, so nothing here retries.
//!
//! ```ignore
//! let client = profile_http::HttpClient::builder()
//!     .user_agent("profile-cli/0.1")
//!     .build()?;
//! let profile: serde_json::Value = client
//!     .get("https://profiles.example.com/api/users/u1")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod error;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{DEFAULT_USER_AGENT, HttpClientConfig, TlsRootConfig, TransportSecurity};
pub use error::{HttpError, InvalidUriKind};
pub use http::StatusCode;
pub use request::RequestBuilder;
pub use response::HttpResponse;
