//! Integration tests for the products domain
//!
//! These run against a real PostgreSQL via testcontainers and need Docker:
//! `cargo test -p domain_products -- --ignored`

use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

async fn repository(db: &TestDatabase) -> PgProductRepository {
    let repo = PgProductRepository::new(db.connection());
    repo.ensure_schema().await.unwrap();
    repo
}

fn input(builder: &TestDataBuilder, suffix: &str) -> ProductInput {
    ProductInput {
        name: builder.name("product", suffix),
        description: builder.description(suffix),
        weight: builder.weight(),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_find_product() {
    let db = TestDatabase::new().await;
    let repo = repository(&db).await;
    let builder = TestDataBuilder::from_test_name("create_and_find");

    let created = repo.create(input(&builder, "main")).await.unwrap();
    assert_uuid_v4(&created.id, "created product id");
    assert_eq!(created.name, builder.name("product", "main"));

    let found = repo.find_one(&created.id).await.unwrap();
    let found = assert_some(found, "product should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.weight, created.weight);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ensure_schema_is_idempotent() {
    let db = TestDatabase::new().await;
    let repo = repository(&db).await;

    repo.ensure_schema().await.unwrap();
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_all_in_insertion_order() {
    let db = TestDatabase::new().await;
    let repo = repository(&db).await;
    let builder = TestDataBuilder::from_test_name("insertion_order");

    for suffix in ["a", "b", "c"] {
        repo.create(input(&builder, suffix)).await.unwrap();
    }

    let names: Vec<String> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(
        names,
        ["a", "b", "c"].map(|s| builder.name("product", s))
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_keeps_id_and_created_at() {
    let db = TestDatabase::new().await;
    let repo = repository(&db).await;
    let builder = TestDataBuilder::from_test_name("update");

    let created = repo.create(input(&builder, "before")).await.unwrap();
    let updated = repo
        .update(
            &created.id,
            ProductInput {
                name: "Table".to_string(),
                description: "Oak table".to_string(),
                weight: 40,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(
        updated.created_at.timestamp_micros(),
        created.created_at.timestamp_micros()
    );
    assert_eq!(updated.name, "Table");
    assert_eq!(updated.weight, 40);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_unknown_id_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = repository(&db).await;
    let builder = TestDataBuilder::from_test_name("update_missing");

    let result = repo.update("missing", input(&builder, "x")).await;
    assert!(matches!(result, Err(ProductError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let repo = repository(&db).await;
    let builder = TestDataBuilder::from_test_name("delete");

    let created = repo.create(input(&builder, "main")).await.unwrap();

    assert!(repo.delete(&created.id).await.unwrap());
    assert!(!repo.delete(&created.id).await.unwrap());
    assert!(repo.find_one(&created.id).await.unwrap().is_none());
}
