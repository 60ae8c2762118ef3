//! Status machine tests — value validation, patch shapes, and the
//! persisted effect of status changes and replies.

mod common;

use chrono::Utc;
use common::{test_service, MemoryBlobStore, RecordingMailer};
use intake_core::{
    error::IntakeError,
    factory::RawSubmission,
    status::ComplaintStatusMachine,
    types::Status,
};

fn raw(priority: &str) -> RawSubmission {
    RawSubmission {
        user_name: "Ada Li".into(),
        user_email: "ada@example.com".into(),
        category: "Technical".into(),
        priority: priority.into(),
        description: "Wifi drops every few minutes in building C.".into(),
        is_anonymous: false,
    }
}

/// A status value outside the three enumerated ones is rejected.
#[test]
fn bogus_status_value_is_rejected() {
    let err = ComplaintStatusMachine::apply_status_change("Bogus").unwrap_err();
    assert!(matches!(err, IntakeError::InvalidStatus { value } if value == "Bogus"));
}

/// A valid change yields a patch with the new status and a fresh timestamp,
/// leaving the reply untouched.
#[test]
fn valid_status_change_produces_patch_with_fresh_timestamp() {
    let before = Utc::now();
    let patch = ComplaintStatusMachine::apply_status_change("Resolved").unwrap();
    assert_eq!(patch.status, Some(Status::Resolved));
    assert_eq!(patch.admin_reply, None);
    assert!(patch.updated_at >= before, "updated_at must be fresh");
}

/// Any status may move to any other — a Resolved complaint can be reopened.
#[test]
fn backward_transitions_are_permitted() {
    for value in ["Pending", "In Progress", "Resolved"] {
        let patch = ComplaintStatusMachine::apply_status_change(value).unwrap();
        assert_eq!(patch.status.map(|s| s.as_str()), Some(value));
    }
}

/// A reply that is empty after trimming is rejected before any persistence.
#[test]
fn blank_reply_is_rejected() {
    let err = ComplaintStatusMachine::apply_reply("   ").unwrap_err();
    assert!(matches!(err, IntakeError::EmptyField { field } if field == "adminReply"));
}

/// A reply patch carries the trimmed text and does not touch the status.
#[test]
fn reply_patch_trims_and_leaves_status_unset() {
    let patch = ComplaintStatusMachine::apply_reply("  Thanks for reporting this.  ").unwrap();
    assert_eq!(patch.admin_reply.as_deref(), Some("Thanks for reporting this."));
    assert_eq!(patch.status, None);
}

/// Persisted effect: a status change updates status and refreshes
/// updated_at while created_at stays fixed.
#[test]
fn status_change_persists_and_refreshes_updated_at() {
    let mut service = test_service(MemoryBlobStore::default(), RecordingMailer::default());
    let receipt = service.submit(&raw("Low"), None).unwrap();

    service
        .update_status(&receipt.complaint_id, "In Progress")
        .unwrap();

    let record = service.track(&receipt.complaint_id).unwrap().unwrap();
    assert_eq!(record.status, Status::InProgress);
    assert!(record.updated_at >= record.created_at);
}

/// Persisted effect: replying leaves the status alone, and a later status
/// change leaves the reply alone.
#[test]
fn reply_and_status_are_independent_updates() {
    let mut service = test_service(MemoryBlobStore::default(), RecordingMailer::default());
    let receipt = service.submit(&raw("Low"), None).unwrap();

    service
        .reply(&receipt.complaint_id, "We are looking into it.")
        .unwrap();
    let record = service.track(&receipt.complaint_id).unwrap().unwrap();
    assert_eq!(record.status, Status::Pending, "reply must not change status");
    assert_eq!(record.admin_reply, "We are looking into it.");

    service
        .update_status(&receipt.complaint_id, "Resolved")
        .unwrap();
    let record = service.track(&receipt.complaint_id).unwrap().unwrap();
    assert_eq!(record.status, Status::Resolved);
    assert_eq!(
        record.admin_reply, "We are looking into it.",
        "status change must not clear the reply"
    );
}

/// Admin actions against an unknown id fail without side effects.
#[test]
fn updates_against_unknown_id_fail() {
    let service = test_service(MemoryBlobStore::default(), RecordingMailer::default());
    let err = service.update_status("CMP-0-0", "Resolved").unwrap_err();
    assert!(matches!(err, IntakeError::UnknownComplaint { .. }));
    let err = service.reply("CMP-0-0", "hello").unwrap_err();
    assert!(matches!(err, IntakeError::UnknownComplaint { .. }));
}
