use async_trait::async_trait;
use profile_editor_sdk::{ProfileApiClient, ProfileApiError, ProfileUpdate, UserId, UserProfile};
use profile_http::{HttpClient, HttpError, HttpResponse, StatusCode};
use tracing::instrument;
use url::Url;

use super::dto::{MessageDto, UpdateProfileRequestDto, UserProfileDto};

/// Confirmation shown when the backend accepts an update without a message.
const DEFAULT_UPDATE_MESSAGE: &str = "Profile updated successfully";

/// HTTP adapter implementing [`ProfileApiClient`].
///
/// - read: `GET {base}/{read_path}/{userId}`
/// - update: `POST {base}/{update_path}` with a JSON body
///
/// `HttpClient` is `Clone + Send + Sync`, so no external locking is needed.
pub struct HttpProfileClient {
    client: HttpClient,
    base: Url,
    read_path: String,
    update_path: String,
}

impl HttpProfileClient {
    #[must_use]
    pub fn new(
        client: HttpClient,
        base: Url,
        read_path: impl Into<String>,
        update_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base,
            read_path: read_path.into(),
            update_path: update_path.into(),
        }
    }

    fn endpoint(&self, path: &str, trailing: Option<&str>) -> Result<Url, ProfileApiError> {
        let mut url = self.base.clone();
        {
            // nothing was sent
            let mut segments = url.path_segments_mut().map_err(|()| {
                ProfileApiError::Transport(format!("base URL '{}' cannot carry a path", self.base))
            })?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(last) = trailing {
                segments.push(last);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ProfileApiClient for HttpProfileClient {
    #[instrument(skip_all, fields(base = %self.base, user_id = %user_id))]
    async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, ProfileApiError> {
        let url = self.endpoint(&self.read_path, Some(user_id.as_str()))?;

        let response = self
            .client
            .get(url.as_str())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = read_body(response).await?;
        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        let dto: UserProfileDto = serde_json::from_slice(&body)
            .map_err(|e| ProfileApiError::InvalidResponse(format!("profile body: {e}")))?;
        Ok(dto.into())
    }

    #[instrument(skip_all, fields(base = %self.base, user_id = %update.user_id))]
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<String, ProfileApiError> {
        let url = self.endpoint(&self.update_path, None)?;

        let response = self
            .client
            .post(url.as_str())
            .json(&UpdateProfileRequestDto::from(update))
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let (status, body) = read_body(response).await?;
        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        let message = serde_json::from_slice::<MessageDto>(&body)
            .ok()
            .and_then(|dto| dto.message)
            .unwrap_or_else(|| DEFAULT_UPDATE_MESSAGE.to_owned());
        Ok(message)
    }
}

async fn read_body(
    response: HttpResponse,
) -> Result<(StatusCode, Vec<u8>), ProfileApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(transport_error)?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "profile API responded");
    Ok((status, body.to_vec()))
}

/// Non-2xx: the server's `message` when it sent one.
fn rejection(status: StatusCode, body: &[u8]) -> ProfileApiError {
    let message = serde_json::from_slice::<MessageDto>(body)
        .ok()
        .and_then(|dto| dto.message);

    match message {
        Some(message) => ProfileApiError::rejected(status.as_u16(), message),
        None => ProfileApiError::InvalidResponse(format!("HTTP {status} without a message")),
    }
}

fn transport_error(err: HttpError) -> ProfileApiError {
    match err {
        HttpError::BodyTooLarge { .. } | HttpError::Json(_) => {
            ProfileApiError::InvalidResponse(err.to_string())
        }
        other => ProfileApiError::Transport(other.to_string()),
    }
}
