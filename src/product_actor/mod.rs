//! # Product Actor
//!
//! This module implements the Product resource actor that owns the catalog.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//! - [`seed_products()`] - The records every catalog starts with
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use product_catalog::clients::ProductClient;
//! use product_catalog::model::ProductCreate;
//! use product_catalog::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client
//!         .create_product(ProductCreate { name: "Widget".into(), price: 30.into() })
//!         .await?;
//!     assert_eq!(client.list().await?.len(), 3);
//!     assert_eq!(client.delete(created.id.clone()).await?, created);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Random identifiers**: every created product gets a fresh UUID v4
//! - **Seeded catalog**: the actor starts with [`seed_products()`]
//! - **Validated partial updates**: `on_update` rejects malformed fields and unknown keys

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new, seeded Product actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    let (actor, client) = ResourceActor::new(mailbox_capacity, ProductId::generate);
    (actor.with_records(seed_products()), client)
}

/// The two records present at startup.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("1", "Mango", 123),
        Product::new("2", "Banana", 12),
    ]
}
