use crate::client::HttpClient;
use crate::config::{HttpClientConfig, TlsRootConfig, TransportSecurity};
use crate::error::HttpError;
use crate::tls;
use bytes::Bytes;
use http::HeaderValue;
use http_body_util::Full;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use std::time::Duration;

/// Fluent construction of an [`HttpClient`] on top of [`HttpClientConfig`].
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: HttpClientConfig,
}

impl HttpClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self { config }
    }

    /// Fail requests that get no response within `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn max_body_size(mut self, size: usize) -> Self {
        self.config.max_body_size = size;
        self
    }

    #[must_use]
    pub fn transport(mut self, transport: TransportSecurity) -> Self {
        self.config.transport = transport;
        self
    }

    #[must_use]
    pub fn tls_roots(mut self, roots: TlsRootConfig) -> Self {
        self.config.tls_roots = roots;
        self
    }

    /// `None` keeps idle pooled connections until the server closes them.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// # Errors
    ///
    /// `Tls` when the root store cannot be set up, `Header` when the user
    /// agent is not a legal header value.
    pub fn build(self) -> Result<HttpClient, HttpError> {
        let HttpClientConfig {
            request_timeout,
            user_agent,
            max_body_size,
            transport,
            tls_roots,
            pool_idle_timeout,
            pool_max_idle_per_host,
        } = self.config;

        if transport == TransportSecurity::AllowInsecureHttp {
            tracing::warn!("plain http:// allowed; traffic to such URLs is unencrypted");
        }

        let user_agent = HeaderValue::try_from(user_agent)?;
        let connector = https_connector(tls_roots, transport)?;

        let mut pool = Client::builder(TokioExecutor::new());
        // idle expiry needs a timer
        pool.pool_timer(TokioTimer::new())
            .pool_max_idle_per_host(pool_max_idle_per_host);
        if let Some(idle) = pool_idle_timeout {
            pool.pool_idle_timeout(idle);
        }

        Ok(HttpClient {
            inner: pool.build::<_, Full<Bytes>>(connector),
            user_agent,
            max_body_size,
            request_timeout,
            transport_security: transport,
        })
    }
}

/// rustls connector advertising h2 and http/1.1.
fn https_connector(
    roots: TlsRootConfig,
    transport: TransportSecurity,
) -> Result<HttpsConnector<HttpConnector>, HttpError> {
    let with_roots = match roots {
        TlsRootConfig::WebPki => HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(tls::crypto_provider())
            .map_err(|e| HttpError::Tls(e.to_string()))?,
        TlsRootConfig::Native => HttpsConnectorBuilder::new()
            .with_tls_config(tls::os_roots_client_config().map_err(HttpError::Tls)?),
    };

    let connector = match transport {
        TransportSecurity::TlsOnly => with_roots.https_only().enable_all_versions().build(),
        TransportSecurity::AllowInsecureHttp => {
            with_roots.https_or_http().enable_all_versions().build()
        }
    };
    Ok(connector)
}
