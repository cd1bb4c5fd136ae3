use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a [`CollectionActor`](crate::CollectionActor).
///
/// The variants are the primitives a document database offers for a single
/// collection: exact-match reads, a "first by descending key" read, inserts,
/// field-level updates and deletes.
///
/// - **FindAll**: every document in insertion order.
/// - **FindOne**: the document whose key equals `key`, if any.
/// - **FindMax**: the document with the greatest key, if any.
/// - **InsertOne**: store a document under its own key.
/// - **InsertNext**: store a document under a key chosen by the collection.
/// - **UpdateOne**: patch the matching document; `None` when nothing matched.
/// - **DeleteOne**: remove the matching document; `false` when nothing matched.
#[derive(Debug)]
pub enum CollectionRequest<D: Document> {
    FindAll {
        respond_to: Response<Vec<D>>,
    },
    FindOne {
        key: D::Key,
        respond_to: Response<Option<D>>,
    },
    FindMax {
        respond_to: Response<Option<D>>,
    },
    InsertOne {
        document: D,
        respond_to: Response<D::Key>,
    },
    InsertNext {
        document: D,
        respond_to: Response<D>,
    },
    UpdateOne {
        key: D::Key,
        update: D::Update,
        respond_to: Response<Option<D>>,
    },
    DeleteOne {
        key: D::Key,
        respond_to: Response<bool>,
    },
}
