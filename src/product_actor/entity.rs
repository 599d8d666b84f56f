//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`actor_framework::ResourceActor`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductPatch};
use crate::validation::validate_patch;
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductPatch;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from an already validated payload.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self::new(id, params.name, params.price))
    }

    /// Full update: name and price are overwritten, the id is kept.
    async fn on_replace(&mut self, params: ProductCreate, _ctx: &()) -> Result<(), ProductError> {
        self.name = params.name;
        self.price = params.price;
        Ok(())
    }

    /// Partial update: validates the fields present in the patch, then merges them.
    ///
    /// # Fields Updated
    /// - `name`: Product name
    /// - `price`: Product price
    async fn on_update(&mut self, patch: ProductPatch, _ctx: &()) -> Result<(), ProductError> {
        let changes = validate_patch(&patch.0)?;
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        Ok(())
    }
}
