//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//! GET  /health/ready                 - Readiness check (database ping)
//!
//! # Catalog
//! GET  /api/categories               - Menu categories
//! GET  /api/products?category=slug   - Available products
//! GET  /api/products/{slug}          - Single product
//! GET  /api/wines?type=red           - Wine list
//!
//! # Content
//! GET  /api/banners                  - Active banners
//! GET  /api/event-gallery            - Published events with photos
//! GET  /api/delivery-zones           - Active delivery zones
//!
//! # Orders
//! POST /api/orders                   - Checkout (rate limited per IP)
//! GET  /api/orders/{order_number}    - Order status lookup
//! ```
//!
//! Every endpoint responds with the `{success, data|error}` envelope.

pub mod catalog;
pub mod content;
pub mod orders;
pub mod wines;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::rate_limit;
use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/products", get(catalog::list_products))
        .route("/products/{slug}", get(catalog::show_product))
        .route("/wines", get(wines::list_wines))
}

/// Create the content routes router.
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/banners", get(content::list_banners))
        .route("/event-gallery", get(content::event_gallery))
        .route("/delivery-zones", get(content::list_delivery_zones))
}

/// Create the order routes router.
///
/// Checkout gets its own strict limiter; the lookup endpoint shares the
/// general API limit applied in `main`.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            post(orders::create_order).layer(rate_limit::checkout_rate_limiter()),
        )
        .route("/orders/{order_number}", get(orders::show_order))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .merge(content_routes())
        .merge(order_routes())
}
