use std::path::PathBuf;

/// Errors that can occur within the document store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Collection closed")]
    CollectionClosed,
    #[error("Collection dropped response channel")]
    CollectionDropped,
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    /// The document type does not generate keys, or has run out of them.
    #[error("Collection '{0}' cannot generate another key")]
    KeysNotGenerated(&'static str),
    #[error("Document error: {0}")]
    Document(Box<dyn std::error::Error + Send + Sync>),
    #[error("Snapshot I/O failed for {}: {source}", path.display())]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Snapshot {} is not a valid document array: {source}", path.display())]
    SnapshotFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
