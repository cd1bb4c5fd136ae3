use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard read and delete operations.
///
/// A domain client wraps a [`CollectionClient`] and exposes its own error type.
/// Implementing [`Repository::inner`] and [`Repository::map_error`] is enough to get
/// `find_all`, `find_one` and `delete_one` for free.
///
/// # Example
///
/// ```rust
/// use doc_store::{CollectionClient, Document, Repository, StoreError};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Tag { name: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error: {0}")]
/// struct TagError(String);
///
/// impl Document for Tag {
///     type Key = String;
///     type Update = ();
///     type Error = TagError;
///     const COLLECTION: &'static str = "tags";
///     fn key(&self) -> &String { &self.name }
///     fn apply(&mut self, _: ()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient { inner: CollectionClient<Tag> }
///
/// #[async_trait]
/// impl Repository<Tag> for TagClient {
///     type Error = TagError;
///
///     fn inner(&self) -> &CollectionClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> TagError {
///         TagError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TagClient) {
///     // find_all(), find_one() and delete_one() are provided automatically!
///     let _ = client.find_all().await;
///     let _ = client.find_one("rust".to_string()).await;
///     let _ = client.delete_one("rust".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait Repository<D: Document>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic [`CollectionClient`].
    fn inner(&self) -> &CollectionClient<D>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Every document, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<D>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all().await.map_err(Self::map_error)
    }

    /// Fetch a document by key.
    #[tracing::instrument(skip(self))]
    async fn find_one(&self, key: D::Key) -> Result<Option<D>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_one(key).await.map_err(Self::map_error)
    }

    /// Delete a document by key. `Ok(false)` when nothing matched.
    #[tracing::instrument(skip(self))]
    async fn delete_one(&self, key: D::Key) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete_one(key).await.map_err(Self::map_error)
    }
}
