//! File attachments — caller-side constraints and the blob store contract.
//!
//! Constraints are enforced BEFORE upload: image content types only, size
//! capped at 5 MiB. The upload itself is an external collaborator behind
//! `BlobStore`; an upload failure aborts the submission before any record
//! persists, so no record ever references a missing blob. The inverse —
//! a blob orphaned by a later persistence failure — is accepted without
//! compensating cleanup.

use crate::error::{IntakeError, IntakeResult};

pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Enforce the submission-side constraints: image type, size cap.
pub fn validate_attachment(attachment: &Attachment, max_bytes: usize) -> IntakeResult<()> {
    if !attachment.content_type.starts_with("image/") {
        return Err(IntakeError::AttachmentRejected {
            reason: format!("only image files are allowed, got {}", attachment.content_type),
        });
    }
    if attachment.bytes.len() > max_bytes {
        return Err(IntakeError::AttachmentRejected {
            reason: format!(
                "file size {} exceeds the {} byte limit",
                attachment.bytes.len(),
                max_bytes
            ),
        });
    }
    Ok(())
}

/// Storage key for an attachment, namespaced by the owning complaint.
pub fn storage_path(complaint_id: &str, file_name: &str) -> String {
    format!("complaints/{complaint_id}/{file_name}")
}

/// Blob storage collaborator. Returns the public URL of the stored object.
pub trait BlobStore {
    fn upload(&self, attachment: &Attachment, path: &str) -> IntakeResult<String>;
}
