//! The complaint record — the sole persisted entity — and its patch shape.
//!
//! INVARIANTS:
//!   - `complaint_id` is assigned exactly once, at creation.
//!   - When `is_anonymous` is true, the identity fields hold the sentinel
//!     values. Redaction happens in the factory, before persistence.
//!   - `admin_reply` defaults to the empty string, never absent.
//!   - Timestamps are stamped by the persistence layer, not the factory.

use crate::types::{ComplaintId, Priority, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity sentinels written in place of the submitted name/email when a
/// complaint is anonymous.
pub const ANONYMOUS_NAME: &str = "Anonymous";
pub const ANONYMOUS_EMAIL: &str = "anonymous@system.com";

/// A persisted complaint as read back from the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub complaint_id: ComplaintId,
    pub user_name: String,
    pub user_email: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub is_anonymous: bool,
    pub file_url: Option<String>,
    pub status: Status,
    pub admin_reply: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated, normalized complaint ready to persist. Identical to
/// `ComplaintRecord` minus the server-assigned timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub complaint_id: ComplaintId,
    pub user_name: String,
    pub user_email: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub is_anonymous: bool,
    pub file_url: Option<String>,
    pub status: Status,
    pub admin_reply: String,
}

impl ComplaintDraft {
    /// Stamp creation timestamps onto the draft. Called by the persistence
    /// layer (and by tests that build records directly).
    pub fn into_record(self, now: DateTime<Utc>) -> ComplaintRecord {
        ComplaintRecord {
            complaint_id: self.complaint_id,
            user_name: self.user_name,
            user_email: self.user_email,
            category: self.category,
            priority: self.priority,
            description: self.description,
            is_anonymous: self.is_anonymous,
            file_url: self.file_url,
            status: self.status,
            admin_reply: self.admin_reply,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial-field update produced by the status machine and applied by the
/// repository. `updated_at` is always refreshed; unset fields are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintPatch {
    pub status: Option<Status>,
    pub admin_reply: Option<String>,
    pub updated_at: DateTime<Utc>,
}
