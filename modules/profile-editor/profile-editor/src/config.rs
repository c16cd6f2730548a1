use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use profile_http::{HttpClientBuilder, HttpError, TlsRootConfig, TransportSecurity};
use serde::{Deserialize, Deserializer};
use url::{Host, Url};

use crate::infra::HttpProfileClient;

/// Environment prefix; nested keys are separated by `__`
/// (e.g. `PROFILE_EDITOR__HTTP__REQUEST_TIMEOUT=5s`).
pub const ENV_PREFIX: &str = "PROFILE_EDITOR__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("invalid api_base_url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("api_base_url '{url}' {reason}")]
    UnusableBaseUrl { url: String, reason: &'static str },

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] HttpError),
}

/// Profile backend location and transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileEditorConfig {
    pub api_base_url: String,
    /// Read endpoint, relative to `api_base_url`; the user id is appended.
    pub read_path: String,
    /// Update endpoint, relative to `api_base_url`.
    pub update_path: String,
    pub http: HttpSettings,
}

impl Default for ProfileEditorConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_owned(),
            read_path: "api/users".to_owned(),
            update_path: "api/users/update".to_owned(),
            http: HttpSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpSettings {
    /// Per-request timeout, e.g. `"10s"`. Unset means wait indefinitely.
    #[serde(deserialize_with = "deserialize_opt_duration")]
    pub request_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub max_body_size: Option<usize>,
    /// Permit plain `http://` base URLs. Loopback hosts (`localhost`,
    /// `127.0.0.1`, `::1`) are always allowed plain HTTP.
    pub allow_insecure_http: bool,
    /// Trust the OS certificate store instead of the bundled Mozilla roots.
    pub native_roots: bool,
}

impl ProfileEditorConfig {
    /// Layer defaults, the optional YAML file and `PROFILE_EDITOR__*` variables.
    ///
    /// # Errors
    ///
    /// `MissingFile` when `path` is given but does not exist, `Invalid` when a
    /// layer cannot be parsed into the config shape.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment.extract().map_err(Box::new)?;
        tracing::debug!(
            api_base_url = %config.api_base_url,
            timeout = ?config.http.request_timeout,
            "profile editor config loaded"
        );
        Ok(config)
    }

    /// Parsed `api_base_url`.
    ///
    /// # Errors
    ///
    /// `InvalidBaseUrl` when the value is not an absolute URL,
    /// `UnusableBaseUrl` when it is not an `http(s)` URL that endpoint paths
    /// can be appended to.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.api_base_url.clone(),
            source,
        })?;

        let unusable = |reason| ConfigError::UnusableBaseUrl {
            url: self.api_base_url.clone(),
            reason,
        };
        if url.cannot_be_a_base() {
            return Err(unusable("cannot carry a path"));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(unusable("must use http or https"));
        }
        Ok(url)
    }

    /// Build the HTTP adapter described by this config.
    ///
    /// # Errors
    ///
    /// `InvalidBaseUrl` or `UnusableBaseUrl` for a bad base URL, `Http` when
    /// the client cannot be constructed.
    pub fn build_client(&self) -> Result<Arc<HttpProfileClient>, ConfigError> {
        let base = self.base_url()?;

        let mut builder = HttpClientBuilder::new();
        if let Some(timeout) = self.http.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &self.http.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(limit) = self.http.max_body_size {
            builder = builder.max_body_size(limit);
        }
        if self.http.allow_insecure_http || is_loopback(&base) {
            builder = builder.transport(TransportSecurity::AllowInsecureHttp);
        }
        if self.http.native_roots {
            builder = builder.tls_roots(TlsRootConfig::Native);
        }

        let client = builder.build()?;
        Ok(Arc::new(HttpProfileClient::new(
            client,
            base,
            self.read_path.as_str(),
            self.update_path.as_str(),
        )))
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

fn deserialize_opt_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| humantime::parse_duration(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
