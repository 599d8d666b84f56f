//! Product records and the payloads that create or change them.
//!
//! [`Product`] implements [`ActorEntity`](actor_framework::ActorEntity) (see
//! `product_actor::entity`), so it can be managed by a
//! [`ResourceActor`](actor_framework::ResourceActor):
//! - creation and replacement take a validated [`ProductCreate`]
//! - partial updates take a raw [`ProductPatch`]

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::Display;
use uuid::Uuid;

/// Opaque product identifier. Serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    /// Mints a fresh random (UUID v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog record.
///
/// `price` keeps the exact JSON number it was given, so `10` is echoed back as `10`
/// rather than `10.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Number,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically minted by the actor system)
    /// * `name` - Product name
    /// * `price` - Product price
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<Number>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// Validated payload for creating or fully replacing a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: Number,
}

/// Raw body of a partial update.
///
/// It is only validated once the actor has found the target product, so an unknown id
/// is reported before a malformed body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPatch(pub Value);

/// The validated fields of a [`ProductPatch`]; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Number>,
}
