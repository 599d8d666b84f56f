//! # Actor Framework
//!
//! This crate provides the foundational building blocks for managing a collection of
//! stateful records behind a single-owner actor. It implements a **Resource-Oriented
//! Architecture (ROA)** pattern on top of the **Actor Model**.
//!
//! ## Why ROA + Actor Model?
//!
//! - Every resource type gets the same lifecycle API: list, get, create, replace, update,
//!   delete, clear.
//! - The records live inside one Tokio task. Requests are messages, processed one at a time,
//!   so every request runs to completion before the next one starts. No locks are taken.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model and its mutation hooks
//! 2. **State Layer** ([`RecordStore`]) - The ordered collection of records
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tag { id: String, label: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("label must not be empty")]
//! struct EmptyLabel;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = String;
//!     type Create = String;
//!     type Update = String;
//!     type Context = ();
//!     type Error = EmptyLabel;
//!
//!     fn id(&self) -> &String { &self.id }
//!
//!     fn from_create_params(id: String, label: String) -> Result<Self, Self::Error> {
//!         if label.is_empty() { return Err(EmptyLabel); }
//!         Ok(Self { id, label })
//!     }
//!
//!     async fn on_replace(&mut self, label: String, _: &()) -> Result<(), Self::Error> {
//!         self.label = label;
//!         Ok(())
//!     }
//!
//!     async fn on_update(&mut self, suffix: String, _: &()) -> Result<(), Self::Error> {
//!         self.label.push_str(&suffix);
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::new(10, || "tag".to_string());
//!     tokio::spawn(actor.run(()));
//!
//!     let tag = client.create("rust".into()).await.unwrap();
//!     let tag = client.update(tag.id, "acean".into()).await.unwrap();
//!     assert_eq!(tag.label, "rustacean");
//!     assert!(client.create(String::new()).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a **MockClient** that hands out a real `ResourceClient<T>`
//! answered from scripted expectations, for fast, deterministic tests of client logic.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::RecordStore;
