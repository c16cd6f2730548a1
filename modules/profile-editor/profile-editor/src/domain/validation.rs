//! Profile schema.
//!
//! The schema is an ordered table of named checks. [`validate`] runs them in
//! order against a draft whose empty links were already removed and reports
//! only the first failure.

use profile_editor_sdk::ProfileLinks;
use url::Url;

use super::draft::{ProfileDraft, ValidDraft};
use super::error::FieldError;
use super::fields::{BIO_MAX_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS, ProfileFields};

type Check = fn(&ProfileDraft) -> Result<(), FieldError>;

const CHECKS: [(&str, Check); 6] = [
    ("name_required", check_name_required),
    ("name_length", check_name_length),
    ("bio_length", check_bio_length),
    ("background_url", check_background_url),
    ("avatar_url", check_avatar_url),
    ("link_urls", check_link_urls),
];

/// Drop links whose value is the empty string.
#[must_use]
pub fn clean_links(links: &ProfileLinks) -> ProfileLinks {
    links
        .iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(key, url)| (key.clone(), url.clone()))
        .collect()
}

/// Validate `draft`, returning a cleaned [`ValidDraft`] or the first violated rule.
///
/// # Errors
///
/// Returns the [`FieldError`] of the first failing check.
pub fn validate(draft: &ProfileDraft) -> Result<ValidDraft, FieldError> {
    let cleaned = ProfileDraft {
        links: clean_links(&draft.links),
        ..draft.clone()
    };

    for (rule, check) in CHECKS {
        if let Err(err) = check(&cleaned) {
            tracing::debug!(rule, field = %err.field, "profile draft rejected");
            return Err(err);
        }
    }

    Ok(ValidDraft::new(cleaned))
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

fn check_name_required(draft: &ProfileDraft) -> Result<(), FieldError> {
    if draft.name.is_empty() {
        return Err(FieldError::new(ProfileFields::NAME, "Name is required"));
    }
    Ok(())
}

fn check_name_length(draft: &ProfileDraft) -> Result<(), FieldError> {
    let len = char_len(&draft.name);
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(FieldError::new(
            ProfileFields::NAME,
            format!("Name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

fn check_bio_length(draft: &ProfileDraft) -> Result<(), FieldError> {
    match &draft.bio {
        Some(bio) if char_len(bio) > BIO_MAX_CHARS => Err(FieldError::new(
            ProfileFields::BIO,
            format!("Bio must be at most {BIO_MAX_CHARS} characters"),
        )),
        _ => Ok(()),
    }
}

fn check_required_url(field: &str, label: &str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::new(field, format!("{label} is required")));
    }
    if !is_absolute_url(value) {
        return Err(FieldError::new(field, format!("{label} must be a valid URL")));
    }
    Ok(())
}

fn check_background_url(draft: &ProfileDraft) -> Result<(), FieldError> {
    check_required_url(
        ProfileFields::BACKGROUND_URL,
        "Background image",
        &draft.background_url,
    )
}

fn check_avatar_url(draft: &ProfileDraft) -> Result<(), FieldError> {
    check_required_url(ProfileFields::AVATAR_URL, "Avatar image", &draft.avatar_url)
}

fn check_link_urls(draft: &ProfileDraft) -> Result<(), FieldError> {
    match draft.links.iter().find(|(_, url)| !is_absolute_url(url)) {
        Some((key, _)) => Err(FieldError::new(
            format!("{}.{key}", ProfileFields::LINKS),
            format!("Invalid URL for {key} link"),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Alice".to_owned(),
            bio: Some(String::new()),
            background_url: "https://x.com/a.png".to_owned(),
            avatar_url: "https://x.com/b.png".to_owned(),
            border_color: None,
            links: ProfileLinks::new(),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        let valid = validate(&valid_draft()).unwrap();
        assert_eq!(valid.name, "Alice");
    }

    #[test]
    fn empty_name_is_required_error() {
        let draft = ProfileDraft {
            name: String::new(),
            ..valid_draft()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.message, "Name is required");
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        for (name, ok) in [
            ("Al", false),
            ("Ali", true),
            ("A".repeat(15).as_str(), true),
            ("A".repeat(16).as_str(), false),
            ("A".repeat(40).as_str(), false),
        ] {
            let draft = ProfileDraft {
                name: name.to_owned(),
                ..valid_draft()
            };
            let result = validate(&draft);
            assert_eq!(result.is_ok(), ok, "name {name:?}");
            if let Err(err) = result {
                assert_eq!(err.message, "Name must be between 3 and 15 characters");
            }
        }
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let draft = ProfileDraft {
            name: "\u{e9}\u{e9}\u{e9}".to_owned(),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn long_bio_fails_regardless_of_later_fields() {
        let draft = ProfileDraft {
            bio: Some("b".repeat(201)),
            background_url: "not a url".to_owned(),
            avatar_url: String::new(),
            ..valid_draft()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.field, "bio");
        assert_eq!(err.message, "Bio must be at most 200 characters");
    }

    #[test]
    fn bio_of_exactly_max_is_accepted() {
        let draft = ProfileDraft {
            bio: Some("b".repeat(200)),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn name_error_wins_over_bio_error() {
        let draft = ProfileDraft {
            name: "Al".to_owned(),
            bio: Some("b".repeat(500)),
            ..valid_draft()
        };
        assert_eq!(validate(&draft).unwrap_err().field, "name");
    }

    #[test]
    fn background_checked_before_avatar() {
        let draft = ProfileDraft {
            background_url: String::new(),
            avatar_url: "nope".to_owned(),
            ..valid_draft()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.field, "background_url");
        assert_eq!(err.message, "Background image is required");
    }

    #[test]
    fn relative_avatar_url_is_invalid() {
        let draft = ProfileDraft {
            avatar_url: "/images/b.png".to_owned(),
            ..valid_draft()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.field, "avatar_url");
        assert_eq!(err.message, "Avatar image must be a valid URL");
    }

    #[test]
    fn empty_links_are_removed_and_never_fail() {
        let mut draft = valid_draft();
        draft.set_link("website", "");
        draft.set_link("github", "");

        let valid = validate(&draft).unwrap();
        assert!(valid.links.is_empty());
    }

    #[test]
    fn non_url_link_fails_citing_the_link() {
        let mut draft = valid_draft();
        draft.set_link("website", "https://alice.dev");
        draft.set_link("twitter", "alice");

        let err = validate(&draft).unwrap_err();
        assert_eq!(err.field, "links.twitter");
        assert_eq!(err.message, "Invalid URL for twitter link");
    }

    #[test]
    fn unknown_link_keys_are_validated_too() {
        let mut draft = valid_draft();
        draft.set_link("mastodon", "https://mastodon.social/@alice");

        let valid = validate(&draft).unwrap();
        assert_eq!(valid.link("mastodon"), "https://mastodon.social/@alice");
    }

    #[test]
    fn clean_links_keeps_non_empty_entries() {
        let mut links = ProfileLinks::new();
        links.insert("website".to_owned(), String::new());
        links.insert("github".to_owned(), "https://github.com/alice".to_owned());

        let cleaned = clean_links(&links);
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned.contains_key("github"));
    }

    #[test]
    fn short_name_example_fails() {
        let draft = ProfileDraft {
            name: "Al".to_owned(),
            ..valid_draft()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.field, "name");
    }
}
