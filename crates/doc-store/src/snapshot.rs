//! JSON snapshot files backing a persistent collection.
//!
//! A collection named `products` stored in `.eshop/` lives in `.eshop/products.json`
//! as a pretty-printed array of documents in insertion order. Every mutation
//! rewrites the whole file through a temporary sibling and a rename, so a crash
//! mid-write leaves the previous snapshot in place.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of one collection's snapshot file.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(dir: impl AsRef<Path>, collection: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{collection}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored documents. A missing file is an empty collection.
    pub fn load<D: DeserializeOwned>(&self) -> Result<Vec<D>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::SnapshotIo {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::SnapshotFormat {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the snapshot with `documents`.
    pub fn save<D: Serialize>(&self, documents: &[D]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::SnapshotIo {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(io_err)?;
        }

        let json =
            serde_json::to_string_pretty(documents).map_err(|source| StoreError::SnapshotFormat {
                path: self.path.clone(),
                source,
            })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!(path = %self.path.display(), count = documents.len(), "Snapshot written");
        Ok(())
    }
}
