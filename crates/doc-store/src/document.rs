use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any stored document type must implement to live in a [`CollectionActor`](crate::CollectionActor).
///
/// # Architecture Note
/// Products and orders are both "a list of documents keyed by one field", so the
/// collection loop is written once against this contract and reused for every
/// collection. Associated types keep the payloads apart: a `Product` collection
/// only accepts `ProductUpdate` patches, never an order patch.
///
/// # Provided Methods (Hooks)
/// - [`Document::validate`] runs before a document is inserted and after a patch is applied.
/// - [`Document::next_key`] / [`Document::set_key`] let a collection hand out keys itself.
///
/// Collections whose keys come from the user keep the defaults.
pub trait Document: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The exact-match lookup key (e.g. a product id or an order number).
    type Key: Ord + Clone + Send + Sync + Display + Debug + 'static;

    /// Field-level patch applied by `update_one`.
    type Update: Send + Sync + Debug + 'static;

    /// The error type for this document.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Collection name, also used as the snapshot file stem.
    const COLLECTION: &'static str;

    /// The document's key.
    fn key(&self) -> &Self::Key;

    /// Apply a patch in place. The collection works on a copy and only keeps the
    /// result when this and [`Document::validate`] succeed.
    fn apply(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Checks invariants before the document is stored.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The key following `max`, the greatest key currently stored (`None` when empty).
    ///
    /// Returning `None` means no key can be handed out: either the collection
    /// does not generate keys or the key space is used up. `insert_next` then
    /// fails with [`StoreError::KeysNotGenerated`](crate::StoreError::KeysNotGenerated).
    fn next_key(_max: Option<&Self::Key>) -> Option<Self::Key> {
        None
    }

    /// Overwrite the key with one handed out by the collection.
    fn set_key(&mut self, _key: Self::Key) {}
}
