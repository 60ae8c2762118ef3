//! Persistence contract the core depends on.
//!
//! The core never assumes a specific document store — only this operation
//! set and its failure modes. The SQLite `IntakeStore` is the bundled
//! reference implementation; a managed document store fulfills the same
//! contract in production.

use crate::{
    error::IntakeResult,
    record::{ComplaintDraft, ComplaintPatch, ComplaintRecord},
};

pub trait ComplaintRepository {
    /// Persist a new complaint keyed by its `complaint_id`, stamping
    /// `created_at` and `updated_at`. A duplicate key is an error.
    fn create(&self, draft: &ComplaintDraft) -> IntakeResult<()>;

    /// Lookup for tracking. An absent id is `Ok(None)`, not an error.
    fn get_by_id(&self, complaint_id: &str) -> IntakeResult<Option<ComplaintRecord>>;

    /// Apply a partial update. Always refreshes `updated_at`; an unknown id
    /// is an error and leaves nothing changed.
    fn update(&self, complaint_id: &str, patch: &ComplaintPatch) -> IntakeResult<()>;

    /// The full current collection, newest first. Every delivery wholly
    /// replaces the caller's working set — this is a snapshot, not a diff.
    /// On transport disruption the call errs and the caller re-requests;
    /// there is no automatic retry.
    fn snapshot_all(&self) -> IntakeResult<Vec<ComplaintRecord>>;
}
