//! Black-box API tests for Osteria.
//!
//! # Running Tests
//!
//! These tests hit running servers over HTTP, so they are `#[ignore]`d
//! by default:
//!
//! ```bash
//! # Start Postgres, run migrations, seed, start both binaries, then:
//! cargo test -p osteria-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_BASE_URL` - storefront under test (default http://localhost:3000)
//! - `ADMIN_BASE_URL` - admin API under test (default http://localhost:3001)
//! - `TEST_ADMIN_EMAIL` / `TEST_ADMIN_PASSWORD` - a seeded admin account

use reqwest::Client;

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// A plain HTTP client for storefront tests.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// A cookie-holding client logged into the admin API.
///
/// Uses `TEST_ADMIN_EMAIL` / `TEST_ADMIN_PASSWORD` (created via
/// `osteria-cli admin create`).
///
/// # Panics
///
/// Panics if the login request fails.
pub async fn admin_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let email =
        std::env::var("TEST_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let password =
        std::env::var("TEST_ADMIN_PASSWORD").unwrap_or_else(|_| "integration-test-pw".to_string());

    let resp = client
        .post(format!("{}/auth/login", admin_base_url()))
        .json(&serde_json::json!({"email": email, "password": password}))
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.status().is_success(), "admin login failed: {}", resp.status());

    client
}
