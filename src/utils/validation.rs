use crate::domain::model::{ContactDraft, ContactField};
use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    // JavaScript 的 \s 另外包含 U+FEFF
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 聯絡表單草稿的第一個問題
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftIssue {
    MissingField(ContactField),
    InvalidEmail,
}

/// 依序檢查：五個欄位皆不可為空字串（不做 trim），再檢查 email 形狀
pub fn check_contact_draft(draft: &ContactDraft) -> std::result::Result<(), DraftIssue> {
    if let Some(field) = ContactField::ALL
        .into_iter()
        .find(|field| draft.get(*field).is_empty())
    {
        return Err(DraftIssue::MissingField(field));
    }

    if !is_email_shaped(&draft.email) {
        return Err(DraftIssue::InvalidEmail);
    }

    Ok(())
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SiteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(SiteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "A".to_string(),
            email: "a@b.co".to_string(),
            phone: "1".to_string(),
            subject: "s".to_string(),
            message: "m".to_string(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("john.doe@gmail.com"));
        assert!(!is_email_shaped("not-an-email"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a b@c.d"));
        assert!(!is_email_shaped("a@@b.c"));
        assert!(!is_email_shaped("@b.c"));
        assert!(!is_email_shaped("a\u{FEFF}@b.co"));
        assert!(!is_email_shaped("a@b\u{FEFF}.co"));
    }

    #[test]
    fn test_missing_field_reported_in_form_order() {
        let mut draft = filled();
        draft.phone.clear();
        draft.message.clear();
        assert_eq!(
            check_contact_draft(&draft),
            Err(DraftIssue::MissingField(ContactField::Phone))
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut draft = filled();
        draft.subject = " ".to_string();
        assert_eq!(check_contact_draft(&draft), Ok(()));
    }

    #[test]
    fn test_presence_checked_before_email() {
        let mut draft = filled();
        draft.email = "bad".to_string();
        draft.name.clear();
        assert_eq!(
            check_contact_draft(&draft),
            Err(DraftIssue::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("profile.api_base_url", "https://api.github.com").is_ok());
        assert!(validate_url("profile.api_base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("profile.api_base_url", "").is_err());
        assert!(validate_url("profile.api_base_url", "api.github.com").is_err());
        assert!(validate_url("profile.api_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_duration() {
        let field = "timers.alert_clear_ms";
        assert!(validate_positive_duration(field, Duration::from_millis(5000)).is_ok());
        assert!(validate_positive_duration(field, Duration::ZERO).is_err());
    }
}
