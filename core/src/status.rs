//! Complaint status machine — validates admin actions and produces patches.
//!
//! The machine never persists anything: each operation yields a
//! `ComplaintPatch` and the caller applies it through the repository. That
//! keeps the machine testable independent of persistence.
//!
//! Transition policy: any status may move to any other (Pending, In
//! Progress, Resolved in any order). Only the *value* is validated, so
//! admins can reopen resolved complaints.

use crate::{
    error::{IntakeError, IntakeResult},
    record::ComplaintPatch,
    types::Status,
};
use chrono::Utc;

pub struct ComplaintStatusMachine;

impl ComplaintStatusMachine {
    /// Validate a raw status value and produce a patch carrying the new
    /// status and a fresh `updated_at`.
    pub fn apply_status_change(new_status: &str) -> IntakeResult<ComplaintPatch> {
        let status = Status::parse(new_status).ok_or_else(|| IntakeError::InvalidStatus {
            value: new_status.to_string(),
        })?;
        Ok(ComplaintPatch {
            status: Some(status),
            admin_reply: None,
            updated_at: Utc::now(),
        })
    }

    /// Validate a free-text admin reply and produce a patch. Status is left
    /// untouched — replying and resolving are independent actions.
    pub fn apply_reply(reply: &str) -> IntakeResult<ComplaintPatch> {
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            return Err(IntakeError::EmptyField {
                field: "adminReply",
            });
        }
        Ok(ComplaintPatch {
            status: None,
            admin_reply: Some(trimmed.to_string()),
            updated_at: Utc::now(),
        })
    }
}
