use std::time::Duration;

/// Default User-Agent string for HTTP requests
pub const DEFAULT_USER_AGENT: &str = concat!("profile-http/", env!("CARGO_PKG_VERSION"));

/// Default response body cap, 2 mebibytes.
const DEFAULT_MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Which URL schemes a client will dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportSecurity {
    #[default]
    TlsOnly,
    /// Also accept `http://`, for local mock backends.
    AllowInsecureHttp,
}

/// Where trusted CA roots come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsRootConfig {
    /// Bundled Mozilla roots (`webpki-roots`).
    #[default]
    WebPki,
    /// The OS trust store.
    Native,
}

/// Settings consumed by [`crate::HttpClientBuilder`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// `None`: wait for the response indefinitely.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
    /// Bodies larger than this fail with `BodyTooLarge`.
    pub max_body_size: usize,
    pub transport: TransportSecurity,
    pub tls_roots: TlsRootConfig,
    pub pool_idle_timeout: Option<Duration>,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            transport: TransportSecurity::TlsOnly,
            tls_roots: TlsRootConfig::WebPki,
            pool_idle_timeout: Some(Duration::from_secs(90)),
            pool_max_idle_per_host: 8,
        }
    }
}

impl HttpClientConfig {
    /// Plain HTTP allowed and a 5 second cap, so a misbehaving mock server
    /// fails the test instead of hanging it.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(5)),
            transport: TransportSecurity::AllowInsecureHttp,
            ..Self::default()
        }
    }
}
