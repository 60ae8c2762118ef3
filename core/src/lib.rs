//! intake-core — complaint intake and lifecycle management.
//!
//! End users submit complaints (optionally anonymous, optionally with one
//! image attachment) and track them by id; admins work a dashboard fed by
//! full-collection snapshots, moving complaints through Pending →
//! In Progress → Resolved and attaching replies.
//!
//! The core is synchronous, single-threaded domain logic. External
//! collaborators — document persistence, blob storage, authentication,
//! transactional email — sit behind narrow traits (`ComplaintRepository`,
//! `BlobStore`, `AuthProvider`, `Mailer`); a SQLite reference store ships
//! in-crate.

pub mod attachment;
pub mod auth;
pub mod config;
pub mod error;
pub mod factory;
pub mod id;
pub mod notify;
pub mod query;
pub mod record;
pub mod repository;
pub mod service;
pub mod status;
pub mod store;
pub mod types;
