//! The intake service — wires the factory, repository, blob store, and
//! mailer into the user-facing operations.
//!
//! CONTROL FLOW (submission): validate attachment → build draft → upload →
//! persist → evaluate notification policy → fire-and-forget send. The
//! persist and the send are sequenced, never transactional: a failed send
//! leaves the created complaint in place.

use crate::{
    attachment::{storage_path, validate_attachment, Attachment, BlobStore},
    config::IntakeConfig,
    error::IntakeResult,
    factory::{ComplaintFactory, RawSubmission},
    notify::{AlertParams, Mailer, NotificationOutcome, NotificationPolicy},
    query::{public_stats, PublicStats},
    record::ComplaintRecord,
    repository::ComplaintRepository,
    status::ComplaintStatusMachine,
    types::ComplaintId,
};
use chrono::Utc;

/// What the submitter gets back: the tracking id plus the alert outcome
/// (which callers are free to ignore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub complaint_id: ComplaintId,
    pub notification: NotificationOutcome,
}

pub struct IntakeService<R, B, M> {
    repository: R,
    blobs: B,
    mailer: M,
    factory: ComplaintFactory,
    config: IntakeConfig,
}

impl<R, B, M> IntakeService<R, B, M>
where
    R: ComplaintRepository,
    B: BlobStore,
    M: Mailer,
{
    pub fn new(config: IntakeConfig, repository: R, blobs: B, mailer: M) -> Self {
        Self {
            factory: ComplaintFactory::new(&config),
            repository,
            blobs,
            mailer,
            config,
        }
    }

    /// Inject a pre-built factory (seeded id stream) for deterministic tests.
    pub fn with_factory(
        config: IntakeConfig,
        factory: ComplaintFactory,
        repository: R,
        blobs: B,
        mailer: M,
    ) -> Self {
        Self {
            factory,
            repository,
            blobs,
            mailer,
            config,
        }
    }

    /// Submit a complaint, optionally with one file attachment.
    pub fn submit(
        &mut self,
        raw: &RawSubmission,
        attachment: Option<&Attachment>,
    ) -> IntakeResult<SubmissionReceipt> {
        if let Some(attachment) = attachment {
            validate_attachment(attachment, self.config.max_attachment_bytes)?;
        }

        let mut draft = self.factory.build(raw)?;

        // Upload before persist: a record must never reference a blob that
        // failed to store.
        if let Some(attachment) = attachment {
            let path = storage_path(&draft.complaint_id, &attachment.file_name);
            let url = self.blobs.upload(attachment, &path)?;
            draft.file_url = Some(url);
        }

        self.repository.create(&draft)?;
        log::info!(
            "complaint {} created (category={}, priority={})",
            draft.complaint_id,
            draft.category,
            draft.priority
        );

        let notification = if NotificationPolicy::should_notify(&draft) {
            let params = AlertParams::for_complaint(&draft, &self.config.admin_email, Utc::now());
            match self.mailer.send(&params) {
                Ok(()) => NotificationOutcome::Sent,
                Err(e) => {
                    // The complaint is already persisted at this point.
                    log::warn!("high-priority alert for {} failed: {e}", draft.complaint_id);
                    NotificationOutcome::Failed(e.to_string())
                }
            }
        } else {
            NotificationOutcome::NotRequired
        };

        Ok(SubmissionReceipt {
            complaint_id: draft.complaint_id,
            notification,
        })
    }

    /// Track a complaint by its id. Absent is `Ok(None)`.
    pub fn track(&self, complaint_id: &str) -> IntakeResult<Option<ComplaintRecord>> {
        self.repository.get_by_id(complaint_id.trim())
    }

    /// The dashboard working set: a full snapshot, newest first. Feed it to
    /// the query engine for counts, badges, and filtered views.
    pub fn dashboard(&self) -> IntakeResult<Vec<ComplaintRecord>> {
        let records = self.repository.snapshot_all()?;
        log::debug!("dashboard snapshot: {} complaints", records.len());
        Ok(records)
    }

    /// Landing-page counters (total submitted / total resolved).
    pub fn public_stats(&self) -> IntakeResult<PublicStats> {
        Ok(public_stats(&self.repository.snapshot_all()?))
    }

    /// Admin action: change a complaint's status. The raw value is validated
    /// by the status machine; any of the three statuses is reachable from
    /// any other.
    pub fn update_status(&self, complaint_id: &str, new_status: &str) -> IntakeResult<()> {
        let patch = ComplaintStatusMachine::apply_status_change(new_status)?;
        self.repository.update(complaint_id, &patch)?;
        log::info!("complaint {complaint_id} status -> {new_status}");
        Ok(())
    }

    /// Admin action: attach or replace the free-text reply. Leaves status
    /// untouched.
    pub fn reply(&self, complaint_id: &str, reply: &str) -> IntakeResult<()> {
        let patch = ComplaintStatusMachine::apply_reply(reply)?;
        self.repository.update(complaint_id, &patch)?;
        log::info!("complaint {complaint_id} admin reply recorded");
        Ok(())
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }
}
