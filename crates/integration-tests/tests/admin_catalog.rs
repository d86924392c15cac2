//! Integration tests for dashboard catalog management.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p osteria-admin)
//! - A seeded admin account (TEST_ADMIN_EMAIL / TEST_ADMIN_PASSWORD)
//!
//! Run with: cargo test -p osteria-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use osteria_integration_tests::{admin_base_url, admin_client, client};

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_unauthenticated_requests_rejected() {
    let resp = client()
        .get(format!("{}/api/products", admin_base_url()))
        .send()
        .await
        .expect("Failed to reach admin");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_category_crud_roundtrip() {
    let admin = admin_client().await;
    let base = admin_base_url();
    let slug = format!("test-{}", Uuid::new_v4());

    // Create
    let resp = admin
        .post(format!("{base}/api/categories"))
        .json(&json!({"name": "Test Category", "slug": slug, "display_order": 99}))
        .send()
        .await
        .expect("Failed to create category");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Invalid JSON");
    let id = body["data"]["id"].as_i64().expect("category id");

    // Duplicate slug conflicts
    let resp = admin
        .post(format!("{base}/api/categories"))
        .json(&json!({"name": "Test Category", "slug": slug}))
        .send()
        .await
        .expect("Failed to re-create category");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Update
    let resp = admin
        .put(format!("{base}/api/categories/{id}"))
        .json(&json!({"name": "Renamed", "slug": slug, "display_order": 98}))
        .send()
        .await
        .expect("Failed to update category");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["data"]["name"], "Renamed");

    // Delete
    let resp = admin
        .delete(format!("{base}/api/categories/{id}"))
        .send()
        .await
        .expect("Failed to delete category");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_product_create_returns_matching_row() {
    let admin = admin_client().await;
    let base = admin_base_url();
    let slug = format!("test-dish-{}", Uuid::new_v4());

    // Need a category to hang the product on
    let resp = admin
        .post(format!("{base}/api/categories"))
        .json(&json!({"name": "Test Dishes", "slug": format!("cat-{}", Uuid::new_v4())}))
        .send()
        .await
        .expect("Failed to create category");
    let category_id = resp.json::<Value>().await.expect("Invalid JSON")["data"]["id"]
        .as_i64()
        .expect("category id");

    let resp = admin
        .post(format!("{base}/api/products"))
        .json(&json!({
            "category_id": category_id,
            "name": "Test Dish",
            "slug": slug,
            "price": "12.00",
            "discount_percent": "25"
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["data"]["slug"], slug.as_str());
    assert_eq!(body["data"]["price"], "12.00");
    assert_eq!(body["data"]["is_available"], true);

    // Cleanup: delete product then category
    let product_id = body["data"]["id"].as_i64().expect("product id");
    let resp = admin
        .delete(format!("{base}/api/products/{product_id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = admin
        .delete(format!("{base}/api/categories/{category_id}"))
        .send()
        .await
        .expect("Failed to delete category");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and seeded admin account"]
async fn test_category_with_products_rejects_delete() {
    let admin = admin_client().await;
    let base = admin_base_url();

    let resp = admin
        .post(format!("{base}/api/categories"))
        .json(&json!({"name": "Busy", "slug": format!("busy-{}", Uuid::new_v4())}))
        .send()
        .await
        .expect("Failed to create category");
    let category_id = resp.json::<Value>().await.expect("Invalid JSON")["data"]["id"]
        .as_i64()
        .expect("category id");

    let resp = admin
        .post(format!("{base}/api/products"))
        .json(&json!({
            "category_id": category_id,
            "name": "Blocker",
            "slug": format!("blocker-{}", Uuid::new_v4()),
            "price": "5.00"
        }))
        .send()
        .await
        .expect("Failed to create product");
    let product_id = resp.json::<Value>().await.expect("Invalid JSON")["data"]["id"]
        .as_i64()
        .expect("product id");

    // Category still has a product
    let resp = admin
        .delete(format!("{base}/api/categories/{category_id}"))
        .send()
        .await
        .expect("Failed to delete category");
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Cleanup
    admin
        .delete(format!("{base}/api/products/{product_id}"))
        .send()
        .await
        .expect("Failed to delete product");
    admin
        .delete(format!("{base}/api/categories/{category_id}"))
        .send()
        .await
        .expect("Failed to delete category");
}
