use actor_framework::ActorClient;
use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{Product, ProductCreate, ProductId};
use product_catalog::product_actor::{seed_products, ProductError};
use product_catalog::validation::ValidationError;
use serde_json::json;
use std::collections::HashSet;

fn params(name: &str, price: i64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        price: price.into(),
    }
}

#[tokio::test]
async fn test_catalog_starts_with_seed_records() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let products = system.product_client.list().await.unwrap();
    assert_eq!(products, seed_products());

    system.shutdown().await.unwrap();
}

/// Creates from many tasks at once: every id is distinct and every record is kept.
#[tokio::test]
async fn test_concurrent_creates_mint_unique_ids() {
    let system = CatalogSystem::new(&CatalogConfig::default());

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client.create_product(params(&format!("Item {i}"), i)).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let product = handle.await.unwrap().unwrap();
        assert!(!product.id.as_str().is_empty());
        ids.insert(product.id);
    }
    assert_eq!(ids.len(), 20);
    assert!(!ids.contains(&ProductId::from("1")));
    assert!(!ids.contains(&ProductId::from("2")));

    let products = system.product_client.list().await.unwrap();
    assert_eq!(products.len(), 22);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_every_stored_record_is_found_by_id() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let client = &system.product_client;

    client.create_product(params("Cherry", 7)).await.unwrap();

    for product in client.list().await.unwrap() {
        let found = client.get(product.id.clone()).await.unwrap();
        assert_eq!(found, Some(product));
    }
    assert_eq!(client.get(ProductId::from("never-issued")).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_replace_and_patch_keep_identity() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let client = &system.product_client;

    let replaced = client
        .replace_product(ProductId::from("1"), params("Mangoes", 200))
        .await
        .unwrap();
    assert_eq!(replaced, Product::new("1", "Mangoes", 200));

    let patched = client
        .patch_product(ProductId::from("2"), json!({ "price": 20 }))
        .await
        .unwrap();
    assert_eq!(patched, Product::new("2", "Banana", 20));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_patch_is_rejected_without_mutation() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let client = &system.product_client;

    let result = client
        .patch_product(ProductId::from("2"), json!({ "name": "Plantain", "price": "x" }))
        .await;
    assert_eq!(
        result,
        Err(ProductError::Invalid(ValidationError::NotANumber("price")))
    );

    let banana = client.get(ProductId::from("2")).await.unwrap();
    assert_eq!(banana, Some(Product::new("2", "Banana", 12)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_id_never_mutates_store() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let client = &system.product_client;
    let missing = ProductId::from("missing");

    assert_eq!(
        client
            .replace_product(missing.clone(), params("Ghost", 1))
            .await,
        Err(ProductError::NotFound(missing.clone()))
    );
    // Existence is checked before the patch body, so even a bad body reports not found.
    assert_eq!(
        client
            .patch_product(missing.clone(), json!({ "price": "x" }))
            .await,
        Err(ProductError::NotFound(missing.clone()))
    );
    assert_eq!(
        client.delete(missing.clone()).await,
        Err(ProductError::NotFound(missing))
    );

    assert_eq!(client.list().await.unwrap(), seed_products());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_one_then_clear() {
    let system = CatalogSystem::new(&CatalogConfig::default());
    let client = &system.product_client;

    let deleted = client.delete(ProductId::from("1")).await.unwrap();
    assert_eq!(deleted, Product::new("1", "Mango", 123));
    assert_eq!(
        client.list().await.unwrap(),
        vec![Product::new("2", "Banana", 12)]
    );

    assert_eq!(client.clear_products().await.unwrap(), 1);
    assert!(client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
