//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! # Auth (session cookie)
//! POST /auth/login                    - Log in (rate limited)
//! POST /auth/logout                   - Log out
//! GET  /auth/me                       - Current admin
//!
//! # Catalog
//! GET|POST       /api/products        - List / create
//! GET|PUT|DELETE /api/products/{id}   - Detail / replace / delete
//! GET|POST       /api/categories      - List / create
//! PUT|DELETE     /api/categories/{id} - Replace / delete
//! GET|POST       /api/wines           - List / create
//! PUT|DELETE     /api/wines/{id}      - Replace / delete
//!
//! # Content
//! GET|POST       /api/banners               - List / create
//! PUT|DELETE     /api/banners/{id}          - Replace / delete
//! GET|POST       /api/events                - List / create
//! GET|PUT|DELETE /api/events/{id}           - Detail / replace / delete
//! POST           /api/events/{id}/photos    - Attach photo
//! DELETE         /api/events/{id}/photos/{photo_id} - Remove photo
//! GET|POST       /api/delivery-zones        - List / create
//! PUT|DELETE     /api/delivery-zones/{id}   - Replace / delete
//!
//! # Orders
//! GET /api/orders?status=&page=       - Paged list (dashboard polls this)
//! GET /api/orders/{id}                - Detail with items
//! PUT /api/orders/{id}/status         - Status change + customer email
//!
//! # Uploads
//! POST /api/uploads/{kind}            - Multipart image to object storage
//! ```
//!
//! Reads require any logged-in admin; mutations require a writing role.

pub mod auth;
pub mod banners;
pub mod categories;
pub mod delivery_zones;
pub mod events;
pub mod orders;
pub mod products;
pub mod uploads;
pub mod wines;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::rate_limit;
use crate::state::AppState;

/// Maximum accepted upload size (5 MiB).
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            post(auth::login).layer(rate_limit::login_rate_limiter()),
        )
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the catalog management router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            put(categories::update).delete(categories::delete),
        )
        .route("/wines", get(wines::list).post(wines::create))
        .route("/wines/{id}", put(wines::update).delete(wines::delete))
}

/// Create the content management router.
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/banners", get(banners::list).post(banners::create))
        .route(
            "/banners/{id}",
            put(banners::update).delete(banners::delete),
        )
        .route("/events", get(events::list).post(events::create))
        .route(
            "/events/{id}",
            get(events::show).put(events::update).delete(events::delete),
        )
        .route("/events/{id}/photos", post(events::add_photo))
        .route(
            "/events/{id}/photos/{photo_id}",
            axum::routing::delete(events::delete_photo),
        )
        .route(
            "/delivery-zones",
            get(delivery_zones::list).post(delivery_zones::create),
        )
        .route(
            "/delivery-zones/{id}",
            put(delivery_zones::update).delete(delivery_zones::delete),
        )
}

/// Create the order management router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::list))
        .route("/orders/{id}", get(orders::show))
        .route("/orders/{id}/status", put(orders::update_status))
}

/// Create the upload router.
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads/{kind}", post(uploads::upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest(
            "/api",
            Router::new()
                .merge(catalog_routes())
                .merge(content_routes())
                .merge(order_routes())
                .merge(upload_routes()),
        )
}
