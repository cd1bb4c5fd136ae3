//! # Order Client
//!
//! Provides the order operations on top of a `CollectionClient<Order>`.
//! It also holds a [`ProductClient`] so line items can be snapshotted from the
//! catalog at the moment they are selected.
use crate::clients::ProductClient;
use crate::model::{next_order_id, Order, OrderCreate, OrderId, OrderUpdate, Product};
use crate::order_store::OrderError;
use async_trait::async_trait;
use doc_store::{CollectionClient, Repository, StoreError};
use tracing::{debug, info, instrument};

/// Client for the order collection.
///
/// Order ids are handed out by the collection itself when an order is placed,
/// so two clients placing orders at the same time never receive the same id.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
    products: ProductClient,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>, products: ProductClient) -> Self {
        Self { inner, products }
    }
}

#[async_trait]
impl Repository<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::Document(source) => match source.downcast::<OrderError>() {
                Ok(error) => *error,
                Err(other) => OrderError::StoreError(other.to_string()),
            },
            StoreError::KeysNotGenerated(_) => OrderError::IdsExhausted,
            other => OrderError::StoreError(other.to_string()),
        }
    }
}

impl OrderClient {
    /// The id the next placed order is expected to receive.
    ///
    /// Informational only: [`OrderClient::place_order`] assigns the real id.
    #[instrument(skip(self))]
    pub async fn next_order_id(&self) -> Result<OrderId, OrderError> {
        let max = self.inner.find_max().await.map_err(Self::map_error)?;
        next_order_id(max.map(|order| order.order_id)).ok_or(OrderError::IdsExhausted)
    }

    /// Looks up the catalog product a line item is about to be taken from.
    #[instrument(skip(self))]
    pub async fn select_product(&self, product_id: &str) -> Result<Product, OrderError> {
        self.products
            .find_one(product_id.to_string())
            .await?
            .ok_or_else(|| OrderError::UnknownProduct(product_id.to_string()))
    }

    /// Stores a new order and returns it with its assigned id and total.
    ///
    /// An order without line items fails with [`OrderError::EmptyOrder`] and is
    /// not written.
    #[instrument(skip(self, params), fields(items = params.items.len()))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let order = Order::new(params.items, params.delivery_address);
        let order = self
            .inner
            .insert_next(order)
            .await
            .map_err(Self::map_error)?;
        info!(order_id = order.order_id, total = order.total_amount, "Order placed");
        Ok(order)
    }

    /// Every order in insertion order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.find_one(order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }

    /// Applies an address/quantity edit; the stored total is recomputed.
    #[instrument(skip(self))]
    pub async fn edit_order(&self, order_id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update_one(order_id, update)
            .await
            .map_err(Self::map_error)?
            .ok_or(OrderError::NotFound(order_id))
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&self, order_id: OrderId) -> Result<(), OrderError> {
        if self.delete_one(order_id).await? {
            Ok(())
        } else {
            Err(OrderError::NotFound(order_id))
        }
    }
}
