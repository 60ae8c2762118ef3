use crate::auth::AuthError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    /// One or more required submission fields were empty after trimming.
    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("Invalid status value: {value}")]
    InvalidStatus { value: String },

    #[error("Invalid priority value: {value}")]
    InvalidPriority { value: String },

    #[error("Unknown category: {value}")]
    InvalidCategory { value: String },

    #[error("Invalid email address: {value}")]
    InvalidEmail { value: String },

    #[error("Attachment rejected: {reason}")]
    AttachmentRejected { reason: String },

    #[error("Complaint {id} already exists")]
    DuplicateComplaint { id: String },

    #[error("Complaint {id} not found")]
    UnknownComplaint { id: String },

    /// Blob upload failed. Aborts the submission before anything persists.
    #[error("Upload failed: {reason}")]
    Upload { reason: String },

    /// Alert delivery failed. Never fails the submission — the service logs
    /// it and reports it through `NotificationOutcome`.
    #[error("Notification send failed: {reason}")]
    Send { reason: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type IntakeResult<T> = Result<T, IntakeError>;
