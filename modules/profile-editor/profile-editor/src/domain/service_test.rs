#[cfg(test)]
mod tests {
    use super::super::*;
    use profile_editor_sdk::{ProfileApiError, UserId};
    use std::sync::Arc;
    use crate::domain::test_support::{MockApiClient, alice_draft, service_with};

    fn user() -> UserId {
        UserId::new("user-1")
    }

    #[tokio::test]
    async fn test_save_without_user_never_calls_backend() {
        let mock = Arc::new(MockApiClient::new());
        let service = service_with(&mock);

        // Invalid draft: the auth check must still win
        let draft = draft::ProfileDraft::default();
        let result = service.save(&draft, None).await;

        assert_eq!(result.unwrap_err(), error::SaveError::Unauthenticated);
        assert_eq!(mock.update_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_without_user_never_calls_backend() {
        let mock = Arc::new(MockApiClient::new());
        let service = service_with(&mock);
        let valid = validation::validate(&alice_draft()).unwrap();

        let result = service.submit(&valid, None).await;

        assert_eq!(result.unwrap_err(), error::SaveError::Unauthenticated);
        assert_eq!(mock.update_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_submitted() {
        let mock = Arc::new(MockApiClient::new());
        let service = service_with(&mock);
        let draft = draft::ProfileDraft {
            name: "Al".to_owned(),
            ..alice_draft()
        };

        let result = service.save(&draft, Some(&user())).await;

        assert!(matches!(result, Err(error::SaveError::Field(ref e)) if e.field == "name"));
        assert_eq!(mock.update_count(), 0);
    }

    #[tokio::test]
    async fn test_save_sends_cleaned_payload() {
        let mock = Arc::new(MockApiClient::new());
        let service = service_with(&mock);
        let mut draft = alice_draft();
        draft.set_link("website", "");
        draft.set_link("github", "https://github.com/alice");

        let saved = service.save(&draft, Some(&user())).await.unwrap();

        assert_eq!(saved.message, "Profile updated successfully");
        let update = mock.last_update().unwrap();
        assert_eq!(update.user_id, user());
        assert_eq!(update.name, "Alice");
        assert_eq!(update.bio, None);
        assert_eq!(update.links.len(), 1);
        assert!(!update.links.contains_key("website"));
        assert_eq!(mock.update_count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_update_becomes_submit_error() {
        let mock = Arc::new(
            MockApiClient::new().with_update_result(Err(ProfileApiError::rejected(500, "db error"))),
        );
        let service = service_with(&mock);

        let err = service
            .save(&alice_draft(), Some(&user()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error: db error");
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_unexpected() {
        let mock = Arc::new(MockApiClient::new().with_update_result(Err(
            ProfileApiError::Transport("connection reset".to_owned()),
        )));
        let service = service_with(&mock);

        let err = service
            .save(&alice_draft(), Some(&user()))
            .await
            .unwrap_err();

        assert!(matches!(err, error::SaveError::Unexpected { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_saves_issue_duplicate_requests() {
        let mock = Arc::new(MockApiClient::new());
        let service = service_with(&mock);

        service.save(&alice_draft(), Some(&user())).await.unwrap();
        service.save(&alice_draft(), Some(&user())).await.unwrap();

        assert_eq!(mock.update_count(), 2);
    }

    #[tokio::test]
    async fn test_load_requires_user() {
        let mock = Arc::new(MockApiClient::new());
        let service = service_with(&mock);

        let err = service.load(None).await.unwrap_err();

        assert_eq!(err, error::LoadError::Unauthenticated);
        assert!(mock.get_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_surfaces_server_message_verbatim() {
        let mock = Arc::new(
            MockApiClient::new().with_profile(Err(ProfileApiError::rejected(404, "User not found"))),
        );
        let service = service_with(&mock);

        let err = service.load(Some(&user())).await.unwrap_err();

        assert_eq!(err.to_string(), "User not found");
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_failed_update_is_logged_without_profile_content() {
        let mock = Arc::new(
            MockApiClient::new().with_update_result(Err(ProfileApiError::rejected(500, "db error"))),
        );
        let service = service_with(&mock);
        let draft = draft::ProfileDraft {
            bio: Some("private bio text".to_owned()),
            ..alice_draft()
        };

        let _ = service.save(&draft, Some(&user())).await;

        assert!(logs_contain("profile update failed"));
        assert!(logs_contain("user-1"));
        assert!(!logs_contain("private bio text"));
    }
}
