#![allow(dead_code)]

//! Shared test doubles for the external collaborators.

use intake_core::{
    attachment::{Attachment, BlobStore},
    config::IntakeConfig,
    error::{IntakeError, IntakeResult},
    factory::ComplaintFactory,
    id::ComplaintIdGenerator,
    notify::{AlertParams, Mailer},
    service::IntakeService,
    store::IntakeStore,
};
use std::sync::{Arc, Mutex};

/// Blob store that remembers every upload path and returns a fake URL.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    pub uploads: Arc<Mutex<Vec<String>>>,
}

impl BlobStore for MemoryBlobStore {
    fn upload(&self, _attachment: &Attachment, path: &str) -> IntakeResult<String> {
        self.uploads.lock().unwrap().push(path.to_string());
        Ok(format!("https://blobs.test/{path}"))
    }
}

/// Blob store whose uploads always fail.
pub struct FailingBlobStore;

impl BlobStore for FailingBlobStore {
    fn upload(&self, _attachment: &Attachment, _path: &str) -> IntakeResult<String> {
        Err(IntakeError::Upload {
            reason: "storage unreachable".into(),
        })
    }
}

/// Mailer that records every alert it was asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<AlertParams>>>,
}

impl Mailer for RecordingMailer {
    fn send(&self, params: &AlertParams) -> IntakeResult<()> {
        self.sent.lock().unwrap().push(params.clone());
        Ok(())
    }
}

/// Mailer whose sends always fail.
pub struct FailingMailer;

impl Mailer for FailingMailer {
    fn send(&self, _params: &AlertParams) -> IntakeResult<()> {
        Err(IntakeError::Send {
            reason: "smtp refused".into(),
        })
    }
}

/// A fully wired service over an in-memory store with a seeded id stream.
pub fn test_service<B: BlobStore, M: Mailer>(blobs: B, mailer: M) -> IntakeService<IntakeStore, B, M> {
    let store = IntakeStore::in_memory().expect("in-memory store");
    store.migrate().expect("migrate");
    let config = IntakeConfig::default_test();
    let factory = ComplaintFactory::with_ids(&config, ComplaintIdGenerator::with_seed(42));
    IntakeService::with_factory(config, factory, store, blobs, mailer)
}

/// A sample image attachment under the size limit.
pub fn png_attachment(len: usize) -> Attachment {
    Attachment {
        file_name: "evidence.png".into(),
        content_type: "image/png".into(),
        bytes: vec![0u8; len],
    }
}
