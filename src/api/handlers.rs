//! One handler per catalog operation.
//!
//! Handlers only orchestrate: validate what must be validated up front, forward the
//! request to the product actor, and shape the response body.

use super::error::ApiError;
use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use crate::validation::validate_product;
use actor_framework::ActorClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Body of a successful full update.
#[derive(Debug, Serialize)]
pub struct ProductEnvelope {
    pub product: Product,
}

/// `GET /api/products`
pub async fn list_products(State(client): State<ProductClient>) -> ApiResult<Vec<Product>> {
    Ok(Json(client.list().await?))
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    client
        .get(ProductId(id))
        .await?
        .map(Json)
        .ok_or(ApiError::LookupMiss)
}

/// `POST /api/products`
pub async fn create_product(
    State(client): State<ProductClient>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(body) = body?;
    let params = validate_product(&body)?;

    let product = client.create_product(params).await?;
    info!(id = %product.id, "Product created");
    Ok(Json(product))
}

/// `PUT /api/products/:id`
///
/// The body is validated before the id is looked up: an invalid body is reported as
/// 400 even when the product does not exist.
pub async fn replace_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ProductEnvelope> {
    let Json(body) = body?;
    let params = validate_product(&body)?;

    let product = client.replace_product(ProductId(id), params).await?;
    Ok(Json(ProductEnvelope { product }))
}

/// `PATCH /api/products/:id`
///
/// The id is looked up first; the fields present in the body are validated afterwards.
/// A request without a JSON body carries no changes. Any other unreadable body is only
/// reported once the product is known to exist.
pub async fn patch_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Product> {
    let id = ProductId(id);
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => json!({}),
        Err(rejection) => {
            if client.get(id.clone()).await?.is_none() {
                return Err(ApiError::NotFound);
            }
            return Err(rejection.into());
        }
    };
    Ok(Json(client.patch_product(id, body).await?))
}

/// `DELETE /api/products/:id`: answers with the removed record.
pub async fn delete_product(
    State(client): State<ProductClient>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    let product = client.delete(ProductId(id)).await?;
    info!(id = %product.id, "Product deleted");
    Ok(Json(product))
}

/// `DELETE /api/products`: answers with the (now empty) collection.
pub async fn delete_all_products(State(client): State<ProductClient>) -> ApiResult<Vec<Product>> {
    let removed = client.clear_products().await?;
    info!(removed, "All products deleted");
    Ok(Json(Vec::new()))
}
