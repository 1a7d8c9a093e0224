use crate::domain::model::{Alert, ContactDraft, ContactField};
use crate::utils::validation::{check_contact_draft, DraftIssue};

/// 一次送出的結果；`generation` 用來判斷清除計時器是否已被新的送出取代
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub outcome: Result<(), DraftIssue>,
    pub generation: u64,
}

impl Submission {
    pub fn is_sent(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 聯絡表單：草稿欄位加上暫時性的提示訊息。不會傳送任何資料。
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    alert: Option<Alert>,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn submit(&mut self) -> Submission {
        self.generation += 1;

        let outcome = check_contact_draft(&self.draft);
        let alert = match outcome {
            Err(DraftIssue::MissingField(field)) => {
                tracing::debug!("Contact form rejected: '{}' is empty", field.key());
                Alert::failure(Alert::MISSING_FIELDS)
            }
            Err(DraftIssue::InvalidEmail) => {
                tracing::debug!("Contact form rejected: invalid email");
                Alert::failure(Alert::INVALID_EMAIL)
            }
            Ok(()) => {
                tracing::info!("✉️  Contact form accepted");
                self.draft = ContactDraft::default();
                Alert::success(Alert::SENT)
            }
        };
        self.alert = Some(alert);

        Submission {
            outcome,
            generation: self.generation,
        }
    }

    /// 計時器到期時呼叫；舊的計時器（已被新送出取代）不做任何事
    pub fn clear_alert(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.alert.is_none() {
            return false;
        }
        self.alert = None;
        true
    }
}
