use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// A type-safe, async handle to a [`CollectionActor`](crate::CollectionActor). Each call
/// sends one [`CollectionRequest`] over a Tokio mpsc channel and awaits the reply on a
/// oneshot channel.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Generic** – works with any type that implements [`Document`].
#[derive(Clone)]
pub struct CollectionClient<D: Document> {
    sender: mpsc::Sender<CollectionRequest<D>>,
}

impl<D: Document> CollectionClient<D> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<D>>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> CollectionRequest<D>,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    pub async fn find_all(&self) -> Result<Vec<D>, StoreError> {
        self.request(|respond_to| CollectionRequest::FindAll { respond_to })
            .await
    }

    pub async fn find_one(&self, key: D::Key) -> Result<Option<D>, StoreError> {
        self.request(|respond_to| CollectionRequest::FindOne { key, respond_to })
            .await
    }

    /// The document with the greatest key.
    pub async fn find_max(&self) -> Result<Option<D>, StoreError> {
        self.request(|respond_to| CollectionRequest::FindMax { respond_to })
            .await
    }

    pub async fn insert_one(&self, document: D) -> Result<D::Key, StoreError> {
        self.request(|respond_to| CollectionRequest::InsertOne {
            document,
            respond_to,
        })
        .await
    }

    /// Inserts `document` under the next key the collection hands out and
    /// returns the stored document.
    pub async fn insert_next(&self, document: D) -> Result<D, StoreError> {
        self.request(|respond_to| CollectionRequest::InsertNext {
            document,
            respond_to,
        })
        .await
    }

    pub async fn update_one(&self, key: D::Key, update: D::Update) -> Result<Option<D>, StoreError> {
        self.request(|respond_to| CollectionRequest::UpdateOne {
            key,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete_one(&self, key: D::Key) -> Result<bool, StoreError> {
        self.request(|respond_to| CollectionRequest::DeleteOne { key, respond_to })
            .await
    }
}
