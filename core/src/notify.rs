//! High-priority alerting — the notification decision and its email binding.
//!
//! The policy is a pure predicate. Delivery is an external collaborator
//! behind the `Mailer` trait, and it is explicitly fire-and-forget: a failed
//! send is logged and reported through `NotificationOutcome`, never surfaced
//! as a submission failure.

use crate::{
    error::IntakeResult,
    record::ComplaintDraft,
    types::Priority,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub struct NotificationPolicy;

impl NotificationPolicy {
    /// Notify if and only if the complaint is High priority and the
    /// submitter is not anonymous (there is no one to follow up with
    /// otherwise).
    pub fn should_notify(draft: &ComplaintDraft) -> bool {
        draft.priority == Priority::High && !draft.is_anonymous
    }
}

/// Template parameters for the transactional email service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertParams {
    pub to_email: String,
    pub complaint_id: String,
    pub user_name: String,
    pub user_email: String,
    pub category: String,
    pub priority: String,
    pub description: String,
    pub date: String,
}

impl AlertParams {
    pub fn for_complaint(draft: &ComplaintDraft, admin_email: &str, now: DateTime<Utc>) -> Self {
        Self {
            to_email: admin_email.to_string(),
            complaint_id: draft.complaint_id.clone(),
            user_name: draft.user_name.clone(),
            user_email: draft.user_email.clone(),
            category: draft.category.clone(),
            priority: draft.priority.to_string(),
            description: draft.description.clone(),
            date: now.format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// Transactional email collaborator. Implementations bind `AlertParams` to a
/// template and deliver it; retry policy is theirs, not the core's.
pub trait Mailer {
    fn send(&self, params: &AlertParams) -> IntakeResult<()>;
}

/// What happened to the alert for a submission. Callers are allowed to
/// ignore this — `Failed` never implies the complaint was not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    /// The policy decided no alert was warranted.
    NotRequired,
    Sent,
    Failed(String),
}
