use crate::client::HttpClient;
use crate::config::TransportSecurity;
use crate::error::{HttpError, InvalidUriKind};
use crate::response::HttpResponse;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue, USER_AGENT};
use http::{Method, Request, Uri};
use http_body_util::Full;
use serde::Serialize;

/// A request under construction.
///
/// Obtained from [`HttpClient::get`] or [`HttpClient::post`]. A bad header is
/// remembered and reported by the next fallible call ([`json`](Self::json) or
/// [`send`](Self::send)). Query strings are expected to be part of the URL
/// already.
#[must_use = "nothing is sent until .send() is awaited"]
pub struct RequestBuilder {
    client: HttpClient,
    method: Method,
    url: String,
    headers: Vec<(HeaderName, HeaderValue)>,
    json_body: Option<Bytes>,
    pending_error: Option<HttpError>,
}

impl RequestBuilder {
    pub(crate) fn new(client: HttpClient, method: Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: Vec::new(),
            json_body: None,
            pending_error: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        if self.pending_error.is_none() {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => self.headers.push((name, value)),
                (Err(e), _) => self.pending_error = Some(e.into()),
                (_, Err(e)) => self.pending_error = Some(e.into()),
            }
        }
        self
    }

    /// Serialize `body` as the request payload. `Content-Type: application/json`
    /// is added at send time unless a content type header was set.
    ///
    /// # Errors
    ///
    /// A previously recorded header error, or `Json` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, HttpError> {
        if let Some(e) = self.pending_error.take() {
            return Err(e);
        }
        self.json_body = Some(Bytes::from(serde_json::to_vec(body)?));
        Ok(self)
    }

    /// Absolute `http(s)` URL permitted by the client's transport mode.
    fn target_uri(&self) -> Result<Uri, HttpError> {
        let invalid = |kind, reason: String| HttpError::InvalidUri {
            url: self.url.clone(),
            kind,
            reason,
        };

        let uri: Uri = self
            .url
            .parse()
            .map_err(|e: http::uri::InvalidUri| invalid(InvalidUriKind::ParseError, e.to_string()))?;

        if uri.authority().is_none() {
            return Err(invalid(InvalidUriKind::MissingAuthority, "no host".to_owned()));
        }

        match (uri.scheme_str(), self.client.transport_security) {
            (Some("https"), _) | (Some("http"), TransportSecurity::AllowInsecureHttp) => Ok(uri),
            (Some("http"), TransportSecurity::TlsOnly) => Err(HttpError::InvalidScheme {
                scheme: "http".to_owned(),
                reason: "client accepts https:// only".to_owned(),
            }),
            (Some(other), _) => Err(HttpError::InvalidScheme {
                scheme: other.to_owned(),
                reason: "not an HTTP scheme".to_owned(),
            }),
            (None, _) => Err(invalid(InvalidUriKind::MissingScheme, "no scheme".to_owned())),
        }
    }

    /// Send the request once.
    ///
    /// Any status code, 4xx and 5xx included, comes back as `Ok`.
    ///
    /// # Errors
    ///
    /// A recorded header error, `InvalidUri` / `InvalidScheme` for an unusable
    /// URL, `Transport` when the exchange fails and `Timeout` when a configured
    /// deadline passes.
    pub async fn send(mut self) -> Result<HttpResponse, HttpError> {
        if let Some(e) = self.pending_error.take() {
            return Err(e);
        }

        let uri = self.target_uri()?;
        let has = |wanted: &HeaderName| self.headers.iter().any(|(name, _)| name == wanted);
        let add_json_type = self.json_body.is_some() && !has(&CONTENT_TYPE);
        let add_user_agent = !has(&USER_AGENT);

        let mut request = Request::builder().method(self.method).uri(uri);
        if add_json_type {
            request = request.header(CONTENT_TYPE, "application/json");
        }
        if add_user_agent {
            request = request.header(USER_AGENT, self.client.user_agent.clone());
        }
        for (name, value) in self.headers {
            request = request.header(name, value);
        }
        let request = request.body(Full::new(self.json_body.unwrap_or_default()))?;

        let exchange = self.client.inner.request(request);
        let inner = if let Some(limit) = self.client.request_timeout {
            tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| HttpError::Timeout(limit))??
        } else {
            exchange.await?
        };

        Ok(HttpResponse {
            inner,
            max_body_size: self.client.max_body_size,
        })
    }
}
