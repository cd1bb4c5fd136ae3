use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use crate::snapshot::Snapshot;
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The task that owns one collection of documents.
///
/// # Architecture Note
/// This struct is the "server" half of a collection. It owns the documents and
/// the receiver end of the channel, and processes requests *sequentially* in
/// [`CollectionActor::run`]. No `Mutex` is needed around the documents, and
/// compound operations such as "find the greatest key, then insert after it"
/// ([`CollectionRequest::InsertNext`]) cannot interleave with other requests.
///
/// # Usage Pattern
///
/// 1.  **Create**: [`CollectionActor::in_memory`] or [`CollectionActor::open`] returns the
///     actor and its [`CollectionClient`].
/// 2.  **Run**: spawn `actor.run()` in a background task.
/// 3.  **Use**: clone the client wherever the collection is needed.
///
/// ```rust
/// use doc_store::{CollectionActor, Document};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Note { id: u32, text: String }
///
/// #[derive(Debug)]
/// struct NoteUpdate { text: Option<String> }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl Document for Note {
///     type Key = u32;
///     type Update = NoteUpdate;
///     type Error = NoteError;
///     const COLLECTION: &'static str = "notes";
///
///     fn key(&self) -> &u32 { &self.id }
///     fn apply(&mut self, update: NoteUpdate) -> Result<(), NoteError> {
///         if let Some(text) = update.text { self.text = text; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = CollectionActor::<Note>::in_memory(10);
///     tokio::spawn(actor.run());
///
///     client.insert_one(Note { id: 7, text: "hello".into() }).await.unwrap();
///     let found = client.find_one(7).await.unwrap();
///     assert_eq!(found.unwrap().text, "hello");
/// }
/// ```
///
/// # Operations
///
/// * **Insert**: validates the document, rejects a key already present, appends.
/// * **InsertNext**: asks [`Document::next_key`] for the successor of the greatest
///   stored key, stamps it with [`Document::set_key`], then inserts.
/// * **Update**: applies the patch to a copy, validates it, rejects a key change
///   onto another document's key, then replaces the original in place.
/// * **Delete**: removes the matching document.
///
/// With a [`Snapshot`] attached every mutation is written through before the
/// reply is sent; if the write fails the in-memory change is rolled back.
pub struct CollectionActor<D: Document> {
    receiver: mpsc::Receiver<CollectionRequest<D>>,
    documents: Vec<D>,
    snapshot: Option<Snapshot>,
}

impl<D: Document> CollectionActor<D> {
    /// Creates an empty collection that lives only as long as its task.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full,
    /// client calls wait for space.
    pub fn in_memory(buffer_size: usize) -> (Self, CollectionClient<D>) {
        Self::with_documents(buffer_size, Vec::new(), None)
    }

    /// Opens the collection persisted under `dir`, loading any existing snapshot.
    pub fn open(
        buffer_size: usize,
        dir: impl AsRef<Path>,
    ) -> Result<(Self, CollectionClient<D>), StoreError> {
        let snapshot = Snapshot::new(dir, D::COLLECTION);
        let documents = snapshot.load::<D>()?;
        info!(
            collection = D::COLLECTION,
            path = %snapshot.path().display(),
            size = documents.len(),
            "Snapshot loaded"
        );
        Ok(Self::with_documents(buffer_size, documents, Some(snapshot)))
    }

    fn with_documents(
        buffer_size: usize,
        documents: Vec<D>,
        snapshot: Option<Snapshot>,
    ) -> (Self, CollectionClient<D>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            documents,
            snapshot,
        };
        (actor, CollectionClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        let collection = D::COLLECTION;
        info!(collection, size = self.documents.len(), "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::FindAll { respond_to } => {
                    debug!(collection, size = self.documents.len(), "FindAll");
                    let _ = respond_to.send(Ok(self.documents.clone()));
                }
                CollectionRequest::FindOne { key, respond_to } => {
                    let found = self.position(&key).map(|i| self.documents[i].clone());
                    debug!(collection, %key, found = found.is_some(), "FindOne");
                    let _ = respond_to.send(Ok(found));
                }
                CollectionRequest::FindMax { respond_to } => {
                    let max = self.max_document().cloned();
                    debug!(collection, found = max.is_some(), "FindMax");
                    let _ = respond_to.send(Ok(max));
                }
                CollectionRequest::InsertOne {
                    document,
                    respond_to,
                } => {
                    debug!(collection, ?document, "InsertOne");
                    let result = self.insert(document);
                    let _ = respond_to.send(result.map(|doc| doc.key().clone()));
                }
                CollectionRequest::InsertNext {
                    mut document,
                    respond_to,
                } => {
                    debug!(collection, ?document, "InsertNext");
                    let next = D::next_key(self.max_document().map(|d| d.key()));
                    let result = match next {
                        Some(key) => {
                            document.set_key(key);
                            self.insert(document)
                        }
                        None => {
                            warn!(collection, "No key available");
                            Err(StoreError::KeysNotGenerated(collection))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                CollectionRequest::UpdateOne {
                    key,
                    update,
                    respond_to,
                } => {
                    debug!(collection, %key, ?update, "UpdateOne");
                    let _ = respond_to.send(self.update(&key, update));
                }
                CollectionRequest::DeleteOne { key, respond_to } => {
                    debug!(collection, %key, "DeleteOne");
                    let _ = respond_to.send(self.delete(&key));
                }
            }
        }

        info!(collection, size = self.documents.len(), "Shutdown");
    }

    fn position(&self, key: &D::Key) -> Option<usize> {
        self.documents.iter().position(|doc| doc.key() == key)
    }

    fn max_document(&self) -> Option<&D> {
        self.documents.iter().max_by(|a, b| a.key().cmp(b.key()))
    }

    fn insert(&mut self, document: D) -> Result<D, StoreError> {
        let collection = D::COLLECTION;
        if let Err(e) = document.validate() {
            warn!(collection, error = %e, "Insert rejected");
            return Err(StoreError::Document(Box::new(e)));
        }
        let key = document.key().clone();
        if self.position(&key).is_some() {
            warn!(collection, %key, "Duplicate key");
            return Err(StoreError::DuplicateKey(key.to_string()));
        }

        self.documents.push(document.clone());
        if let Err(e) = self.persist() {
            self.documents.pop();
            return Err(e);
        }
        info!(collection, %key, size = self.documents.len(), "Inserted");
        Ok(document)
    }

    fn update(&mut self, key: &D::Key, update: D::Update) -> Result<Option<D>, StoreError> {
        let collection = D::COLLECTION;
        let Some(index) = self.position(key) else {
            warn!(collection, %key, "Not found");
            return Ok(None);
        };

        let mut patched = self.documents[index].clone();
        if let Err(e) = patched.apply(update).and_then(|()| patched.validate()) {
            warn!(collection, %key, error = %e, "Update rejected");
            return Err(StoreError::Document(Box::new(e)));
        }
        let new_key = patched.key();
        if new_key != key && self.position(new_key).is_some() {
            warn!(collection, %key, %new_key, "Duplicate key");
            return Err(StoreError::DuplicateKey(new_key.to_string()));
        }

        let original = std::mem::replace(&mut self.documents[index], patched);
        if let Err(e) = self.persist() {
            self.documents[index] = original;
            return Err(e);
        }
        info!(collection, %key, "Updated");
        Ok(Some(self.documents[index].clone()))
    }

    fn delete(&mut self, key: &D::Key) -> Result<bool, StoreError> {
        let collection = D::COLLECTION;
        let Some(index) = self.position(key) else {
            warn!(collection, %key, "Not found");
            return Ok(false);
        };

        let removed = self.documents.remove(index);
        if let Err(e) = self.persist() {
            self.documents.insert(index, removed);
            return Err(e);
        }
        info!(collection, %key, size = self.documents.len(), "Deleted");
        Ok(true)
    }

    fn persist(&self) -> Result<(), StoreError> {
        match &self.snapshot {
            Some(snapshot) => snapshot.save(&self.documents).inspect_err(|e| {
                warn!(collection = D::COLLECTION, error = %e, "Snapshot write failed");
            }),
            None => Ok(()),
        }
    }
}
