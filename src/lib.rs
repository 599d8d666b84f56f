//! # Product Catalog
//!
//! An HTTP service exposing CRUD operations over an in-memory collection of products,
//! built on the resource actor from [`actor_framework`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Product`](model::Product) records (`id`, `name`, `price`) and the payloads that create
//! or change them.
//!
//! ### 2. The Rules ([`validation`])
//! Pure validation of untrusted JSON, reporting the first violated rule.
//!
//! ### 3. The State ([`product_actor`])
//! The [`ActorEntity`](actor_framework::ActorEntity) implementation for `Product`. The
//! actor owns the ordered record store and handles one request at a time.
//!
//! ### 4. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) wraps the generic `ResourceClient` and turns
//! framework errors back into [`ProductError`](product_actor::ProductError).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`CatalogSystem`](lifecycle::CatalogSystem) spawns the seeded actor and shuts it down.
//!
//! ### 6. The Edge ([`api`])
//! `axum` router and handlers mapping each operation to status codes and JSON bodies.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl localhost:3000/api/products
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod validation;
