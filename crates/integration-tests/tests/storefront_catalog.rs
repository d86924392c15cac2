//! Integration tests for the public catalog endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and the demo seed
//! - The storefront server running (cargo run -p osteria-storefront)
//!
//! Run with: cargo test -p osteria-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use osteria_integration_tests::{client, storefront_base_url};

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", storefront_base_url()))
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_categories_envelope() {
    let resp = client()
        .get(format!("{}/api/categories", storefront_base_url()))
        .send()
        .await
        .expect("Failed to list categories");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], true);
    assert!(body["data"].is_array());
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_products_carry_final_price() {
    let resp = client()
        .get(format!("{}/api/products", storefront_base_url()))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Invalid JSON");
    let products = body["data"].as_array().expect("data should be an array");

    for product in products {
        assert!(product["final_price"].is_string(), "missing final_price");
        assert_eq!(product["is_available"], true, "hidden product leaked");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_products_category_filter() {
    let base = storefront_base_url();

    let resp = client()
        .get(format!("{base}/api/products?category=pizza"))
        .send()
        .await
        .expect("Failed to filter products");
    assert_eq!(resp.status(), StatusCode::OK);

    // An unknown category is an empty list, not an error
    let resp = client()
        .get(format!("{base}/api/products?category=no-such-category"))
        .send()
        .await
        .expect("Failed to filter products");
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_unknown_product_is_404() {
    let resp = client()
        .get(format!(
            "{}/api/products/no-such-product",
            storefront_base_url()
        ))
        .send()
        .await
        .expect("Failed to fetch product");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_wine_type_filter_validation() {
    let base = storefront_base_url();

    let resp = client()
        .get(format!("{base}/api/wines?type=red"))
        .send()
        .await
        .expect("Failed to list wines");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client()
        .get(format!("{base}/api/wines?type=orange"))
        .send()
        .await
        .expect("Failed to list wines");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
