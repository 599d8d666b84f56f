//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
use crate::model::{Product, ProductCreate, ProductId, ProductPatch};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
///
/// `list`, `get` and `delete` come from [`ActorClient`].
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Recovers the typed [`ProductError`] raised by entity hooks; everything else is a
    /// communication failure.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(ProductId(id)),
            FrameworkError::EntityError(source) => match source.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Stores a validated product under a freshly minted id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Replaces name and price of an existing product.
    #[instrument(skip(self))]
    pub async fn replace_product(
        &self,
        id: ProductId,
        params: ProductCreate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.replace(id, params).await.map_err(Self::map_error)
    }

    /// Merges the fields of `body` into an existing product.
    ///
    /// The body is validated by the actor after the product has been found.
    #[instrument(skip(self, body))]
    pub async fn patch_product(&self, id: ProductId, body: Value) -> Result<Product, ProductError> {
        debug!(?body, "Sending request");
        self.inner
            .update(id, ProductPatch(body))
            .await
            .map_err(Self::map_error)
    }

    /// Removes every product, returning how many were dropped.
    #[instrument(skip(self))]
    pub async fn clear_products(&self) -> Result<usize, ProductError> {
        debug!("Sending request");
        self.inner.clear().await.map_err(Self::map_error)
    }
}
