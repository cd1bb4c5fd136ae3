//! # Mock Collections & Testing Guide
//!
//! [`MockCollection<D>`] hands out a real [`CollectionClient<D>`] whose requests are
//! answered from a queue of expectations instead of a running collection. Domain
//! clients built on top of it can be tested without spawning any collection task,
//! including failure paths that are awkward to provoke for real (a closed store,
//! a snapshot write error).
//!
//! ## When to use Mocks vs Real Collections
//!
//! | Feature | MockCollection | CollectionActor |
//! |---------|----------------|-----------------|
//! | **State** | None (scripted replies) | Real documents |
//! | **Use Case** | Logic *around* the client | The collection itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//!
//! ## Example
//!
//! ```rust
//! use doc_store::mock::MockCollection;
//! use doc_store::{Document, StoreError};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tag { name: String }
//! #[derive(Debug, thiserror::Error)] #[error("tag")] struct TagError;
//!
//! impl Document for Tag {
//!     type Key = String; type Update = (); type Error = TagError;
//!     const COLLECTION: &'static str = "tags";
//!     fn key(&self) -> &String { &self.name }
//!     fn apply(&mut self, _: ()) -> Result<(), TagError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCollection::<Tag>::new();
//!     mock.expect_find_one("rust".to_string())
//!         .return_ok(Some(Tag { name: "rust".into() }));
//!     mock.expect_delete_one("go".to_string())
//!         .return_err(StoreError::CollectionClosed);
//!
//!     let client = mock.client();
//!     assert!(client.find_one("rust".to_string()).await.unwrap().is_some());
//!     assert!(matches!(
//!         client.delete_one("go".to_string()).await,
//!         Err(StoreError::CollectionClosed)
//!     ));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong operation or wrong key) panics the mock task, and the
//! caller sees [`StoreError::CollectionDropped`].

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the reply to send for it.
enum Expectation<D: Document> {
    FindAll {
        response: Result<Vec<D>, StoreError>,
    },
    FindOne {
        key: D::Key,
        response: Result<Option<D>, StoreError>,
    },
    FindMax {
        response: Result<Option<D>, StoreError>,
    },
    InsertOne {
        response: Result<D::Key, StoreError>,
    },
    InsertNext {
        response: Result<D, StoreError>,
    },
    UpdateOne {
        key: D::Key,
        response: Result<Option<D>, StoreError>,
    },
    DeleteOne {
        key: D::Key,
        response: Result<bool, StoreError>,
    },
}

type Queue<D> = Arc<Mutex<VecDeque<Expectation<D>>>>;

/// A collection stand-in with expectation tracking for fluent testing.
pub struct MockCollection<D: Document> {
    client: CollectionClient<D>,
    expectations: Queue<D>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<D: Document> Default for MockCollection<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Document> MockCollection<D> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<D>>(100);
        let expectations: Queue<D> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::FindAll { respond_to },
                        Some(Expectation::FindAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::FindOne { key, respond_to },
                        Some(Expectation::FindOne {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "find_one called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::FindMax { respond_to },
                        Some(Expectation::FindMax { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::InsertOne { respond_to, .. },
                        Some(Expectation::InsertOne { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::InsertNext { respond_to, .. },
                        Some(Expectation::InsertNext { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::UpdateOne {
                            key, respond_to, ..
                        },
                        Some(Expectation::UpdateOne {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "update_one called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::DeleteOne { key, respond_to },
                        Some(Expectation::DeleteOne {
                            key: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(key, expected, "delete_one called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<D> {
        self.client.clone()
    }

    pub fn expect_find_all(&mut self) -> ExpectationBuilder<D, Vec<D>> {
        self.builder(|response| Expectation::FindAll { response })
    }

    pub fn expect_find_one(&mut self, key: D::Key) -> ExpectationBuilder<D, Option<D>> {
        self.builder(move |response| Expectation::FindOne { key, response })
    }

    pub fn expect_find_max(&mut self) -> ExpectationBuilder<D, Option<D>> {
        self.builder(|response| Expectation::FindMax { response })
    }

    pub fn expect_insert_one(&mut self) -> ExpectationBuilder<D, D::Key> {
        self.builder(|response| Expectation::InsertOne { response })
    }

    pub fn expect_insert_next(&mut self) -> ExpectationBuilder<D, D> {
        self.builder(|response| Expectation::InsertNext { response })
    }

    pub fn expect_update_one(&mut self, key: D::Key) -> ExpectationBuilder<D, Option<D>> {
        self.builder(move |response| Expectation::UpdateOne { key, response })
    }

    pub fn expect_delete_one(&mut self, key: D::Key) -> ExpectationBuilder<D, bool> {
        self.builder(move |response| Expectation::DeleteOne { key, response })
    }

    fn builder<T>(
        &self,
        make: impl FnOnce(Result<T, StoreError>) -> Expectation<D> + 'static,
    ) -> ExpectationBuilder<D, T> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that records the reply for one expected request.
pub struct ExpectationBuilder<D: Document, T> {
    make: Box<dyn FnOnce(Result<T, StoreError>) -> Expectation<D>>,
    expectations: Queue<D>,
}

impl<D: Document, T> ExpectationBuilder<D, T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}
