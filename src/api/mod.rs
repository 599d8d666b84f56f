//! # HTTP API
//!
//! JSON-over-HTTP surface of the catalog, built with `axum`.
//!
//! | Method | Path | Success body |
//! |---|---|---|
//! | GET | `/api/products` | every product |
//! | GET | `/api/products/:id` | the product |
//! | POST | `/api/products` | the created product |
//! | PUT | `/api/products/:id` | `{"product": ...}` |
//! | PATCH | `/api/products/:id` | the merged product |
//! | DELETE | `/api/products/:id` | the deleted product |
//! | DELETE | `/api/products` | `[]` |
//!
//! The collection routes answer with and without a trailing slash.

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::clients::ProductClient;
use axum::routing::get;
use axum::Router;
use handlers::*;
use tower_http::trace::TraceLayer;

/// Builds the application router around a product client.
pub fn router(client: ProductClient) -> Router {
    let collection = get(list_products)
        .post(create_product)
        .delete(delete_all_products);

    Router::new()
        .route("/api/products", collection.clone())
        .route("/api/products/", collection)
        .route(
            "/api/products/:id",
            get(get_product)
                .put(replace_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
