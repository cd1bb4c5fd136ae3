//! # Product Client
//!
//! Provides the catalog operations on top of a `CollectionClient<Product>`:
//! add, list, look up, edit and remove. Expected failures come back as
//! [`ProductError`] variants (`NotFound`, `AlreadyExists`, `InvalidPrice`) so the
//! console can report them and carry on.
use crate::model::{Product, ProductUpdate};
use crate::product_store::ProductError;
use async_trait::async_trait;
use doc_store::{CollectionClient, Repository, StoreError};
use tracing::{debug, instrument};

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductClient {
    inner: CollectionClient<Product>,
}

impl ProductClient {
    pub fn new(inner: CollectionClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Repository<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &CollectionClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::DuplicateKey(key) => ProductError::AlreadyExists(key),
            StoreError::Document(source) => match source.downcast::<ProductError>() {
                Ok(error) => *error,
                Err(other) => ProductError::StoreError(other.to_string()),
            },
            other => ProductError::StoreError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Adds a product to the catalog.
    ///
    /// Fails with [`ProductError::AlreadyExists`] when the id is taken and
    /// [`ProductError::InvalidPrice`] for a negative price; nothing is written in
    /// either case.
    #[instrument(skip(self, product), fields(product_id = %product.product_id))]
    pub async fn add_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "add_product called");
        self.inner
            .insert_one(product.clone())
            .await
            .map_err(Self::map_error)?;
        Ok(product)
    }

    /// The whole catalog in insertion order.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: &str) -> Result<Product, ProductError> {
        self.find_one(product_id.to_string())
            .await?
            .ok_or_else(|| ProductError::NotFound(product_id.to_string()))
    }

    /// Applies a field-level edit.
    ///
    /// Changing the id to one used by a different product fails with
    /// [`ProductError::AlreadyExists`] and leaves both products unchanged.
    #[instrument(skip(self))]
    pub async fn edit_product(
        &self,
        product_id: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update_one(product_id.to_string(), update)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| ProductError::NotFound(product_id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: &str) -> Result<(), ProductError> {
        if self.delete_one(product_id.to_string()).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(product_id.to_string()))
        }
    }
}
