use crate::error::HttpError;
use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use serde::de::DeserializeOwned;

/// Bytes of a non-2xx body kept in [`HttpError::Status`].
const ERROR_BODY_PREVIEW_LIMIT: usize = 8 * 1024;

/// A received response whose body has not been read yet.
///
/// [`bytes`](Self::bytes) reads regardless of status, which is what callers
/// that interpret error bodies themselves want. The other readers turn a
/// non-2xx status into [`HttpError::Status`]. Every reader enforces the
/// client's body size cap.
#[derive(Debug)]
pub struct HttpResponse {
    pub(crate) inner: Response<Incoming>,
    pub(crate) max_body_size: usize,
}

impl HttpResponse {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// # Errors
    ///
    /// `BodyTooLarge`, or `Transport` if the connection drops mid-body.
    pub async fn bytes(self) -> Result<Bytes, HttpError> {
        collect_capped(self.inner, self.max_body_size).await
    }

    /// # Errors
    ///
    /// `Status` for non-2xx, plus everything [`bytes`](Self::bytes) returns.
    pub async fn checked_bytes(self) -> Result<Bytes, HttpError> {
        success_body(self.inner, self.max_body_size).await
    }

    /// # Errors
    ///
    /// As [`checked_bytes`](Self::checked_bytes), or `Json` if the body does not decode.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let body = success_body(self.inner, self.max_body_size).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Lossy UTF-8.
    ///
    /// # Errors
    ///
    /// As [`checked_bytes`](Self::checked_bytes).
    pub async fn text(self) -> Result<String, HttpError> {
        let body = success_body(self.inner, self.max_body_size).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

async fn success_body(response: Response<Incoming>, cap: usize) -> Result<Bytes, HttpError> {
    let status = response.status();
    if status.is_success() {
        return collect_capped(response, cap).await;
    }

    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    // the status error wins over an oversized error body
    let body_preview = match collect_capped(response, cap.min(ERROR_BODY_PREVIEW_LIMIT)).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(HttpError::BodyTooLarge { .. }) => "<error body truncated>".to_owned(),
        Err(other) => return Err(other),
    };

    Err(HttpError::Status {
        status,
        body_preview,
        content_type,
    })
}

async fn collect_capped(response: Response<Incoming>, cap: usize) -> Result<Bytes, HttpError> {
    let mut body = std::pin::pin!(response.into_body());
    let mut buf = Vec::new();

    while let Some(frame) = body.frame().await {
        let Some(chunk) = frame?.into_data().ok() else {
            continue;
        };
        let read = buf.len() + chunk.len();
        if read > cap {
            return Err(HttpError::BodyTooLarge {
                limit: cap,
                actual: read,
            });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(Bytes::from(buf))
}
