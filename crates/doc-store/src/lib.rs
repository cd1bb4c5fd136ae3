//! # Document Store
//!
//! A small document database for single-process applications. Each collection is
//! owned by one Tokio task (a [`CollectionActor`]) that serves exact-match reads,
//! inserts, field-level updates and deletes over a channel, and optionally
//! persists its documents to a JSON snapshot file after every mutation.
//!
//! ## Why a task per collection?
//!
//! - **Isolated state**: the documents are owned by the task, so no locks are needed.
//! - **Sequential processing**: requests are handled one at a time, which makes
//!   compound operations like "assign the next key and insert" atomic.
//! - **Cheap handles**: a [`CollectionClient`] is just a channel sender and can be
//!   cloned into every component that needs the collection.
//!
//! ## Module Tour
//!
//! - [`document`]: the [`Document`] trait a stored type implements (key, patch, validation, key generation).
//! - [`actor`]: the [`CollectionActor`] request loop.
//! - [`client`]: the typed [`CollectionClient`].
//! - [`repository`]: the [`Repository`] trait for domain clients wrapping a collection.
//! - [`snapshot`]: JSON file persistence.
//! - [`mock`]: [`MockCollection`](mock::MockCollection) for testing domain clients without a running collection.
//! - [`tracing`]: subscriber setup shared by binaries.
//!
//! ## Failure model
//!
//! There are no retries or timeouts. A collection whose task has stopped reports
//! [`StoreError::CollectionClosed`]; a snapshot that cannot be read or written
//! reports the file path in [`StoreError::SnapshotIo`] / [`StoreError::SnapshotFormat`].

pub mod actor;
pub mod client;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod repository;
pub mod snapshot;
pub mod tracing;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use document::Document;
pub use error::StoreError;
pub use message::{CollectionRequest, Response};
pub use repository::Repository;
pub use snapshot::Snapshot;
