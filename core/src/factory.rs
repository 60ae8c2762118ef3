//! Complaint factory — builds a normalized draft from raw submission input.
//!
//! RULES:
//!   - All text inputs are trimmed before validation.
//!   - Every empty required field is reported, not just the first.
//!   - Anonymity redaction happens here, before anything persists: the
//!     sentinels overwrite whatever was submitted.
//!   - The factory never touches the clock or the database. Timestamps are
//!     the persistence layer's job; persistence is the caller's.

use crate::{
    config::IntakeConfig,
    error::{IntakeError, IntakeResult},
    id::ComplaintIdGenerator,
    record::{ComplaintDraft, ANONYMOUS_EMAIL, ANONYMOUS_NAME},
    types::{Priority, Status},
};

/// Raw form input, exactly as the submission surface hands it over.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub user_name: String,
    pub user_email: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub is_anonymous: bool,
}

pub struct ComplaintFactory {
    ids: ComplaintIdGenerator,
    categories: Vec<String>,
    max_description_chars: usize,
}

impl ComplaintFactory {
    pub fn new(config: &IntakeConfig) -> Self {
        Self::with_ids(config, ComplaintIdGenerator::new())
    }

    /// Inject a seeded generator for deterministic tests.
    pub fn with_ids(config: &IntakeConfig, ids: ComplaintIdGenerator) -> Self {
        Self {
            ids,
            categories: config.categories.clone(),
            max_description_chars: config.max_description_chars,
        }
    }

    /// Build a normalized draft. `file_url` stays `None`; the caller attaches
    /// an upload reference after a successful upload, keyed by the draft's id.
    pub fn build(&mut self, raw: &RawSubmission) -> IntakeResult<ComplaintDraft> {
        let user_name = raw.user_name.trim();
        let user_email = raw.user_email.trim();
        let category = raw.category.trim();
        let priority = raw.priority.trim();
        let description = raw.description.trim();

        let mut missing = Vec::new();
        if user_name.is_empty() {
            missing.push("userName");
        }
        if user_email.is_empty() {
            missing.push("userEmail");
        }
        if category.is_empty() {
            missing.push("category");
        }
        if priority.is_empty() {
            missing.push("priority");
        }
        if description.is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(IntakeError::Validation { missing });
        }

        let priority = Priority::parse(priority).ok_or_else(|| IntakeError::InvalidPriority {
            value: priority.to_string(),
        })?;

        if !self.categories.iter().any(|c| c == category) {
            return Err(IntakeError::InvalidCategory {
                value: category.to_string(),
            });
        }

        // Anonymous submissions carry the sentinels; only real identities
        // get the email shape check.
        let (user_name, user_email) = if raw.is_anonymous {
            (ANONYMOUS_NAME.to_string(), ANONYMOUS_EMAIL.to_string())
        } else {
            if !is_valid_email(user_email) {
                return Err(IntakeError::InvalidEmail {
                    value: user_email.to_string(),
                });
            }
            (user_name.to_string(), user_email.to_string())
        };

        Ok(ComplaintDraft {
            complaint_id: self.ids.generate(),
            user_name,
            user_email,
            category: category.to_string(),
            priority,
            description: cap_chars(description, self.max_description_chars),
            is_anonymous: raw.is_anonymous,
            file_url: None,
            status: Status::Pending,
            admin_reply: String::new(),
        })
    }
}

/// Input-time description cap (character-based, not byte-based).
fn cap_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

/// Shape check only: one `@`, non-empty local part, a dot inside the domain,
/// no whitespace. Deliverability is the mail provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
