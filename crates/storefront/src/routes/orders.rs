//! Checkout and order lookup handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use osteria_core::models::{Order, OrderItem};
use osteria_core::{ApiResponse, Email};

use crate::checkout::{self, RequestedItem};
use crate::db::orders::NewOrder;
use crate::db::{CatalogRepository, ContentRepository, OrderRepository};
use crate::error::{AppError, Result};
use crate::middleware::ClientIp;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// Present for delivery orders; absent means pickup.
    pub delivery_address: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<RequestedItem>,
}

/// Order payload returned from checkout and lookup.
#[derive(Debug, Serialize)]
pub struct OrderPayload {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Create an order.
///
/// Prices come from catalog rows, never from the client. The two
/// notification emails are sent off-request; a mail failure is logged
/// but the order stands.
pub async fn create_order(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderPayload>>)> {
    let customer_name = body.customer_name.trim().to_string();
    if customer_name.is_empty() {
        return Err(AppError::BadRequest("customer_name is required".to_string()));
    }

    let customer_phone = body.customer_phone.trim().to_string();
    if customer_phone.is_empty() {
        return Err(AppError::BadRequest("customer_phone is required".to_string()));
    }

    let customer_email = Email::parse(&body.customer_email)
        .map_err(|e| AppError::BadRequest(format!("customer_email: {e}")))?;

    // The address decides delivery vs pickup; delivery needs a postal code
    // for the zone lookup.
    let delivery_address = body
        .delivery_address
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);
    let postal_code = body
        .postal_code
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    if delivery_address.is_some() && postal_code.is_none() {
        return Err(AppError::BadRequest(
            "postal_code is required for delivery orders".to_string(),
        ));
    }

    let product_ids: Vec<_> = body.items.iter().map(|item| item.product_id).collect();
    let products = CatalogRepository::new(state.pool())
        .get_by_ids(&product_ids)
        .await?;
    let lines = checkout::price_items(&body.items, &products)?;

    let zone = match (&delivery_address, &postal_code) {
        (Some(_), Some(code)) => {
            ContentRepository::new(state.pool())
                .get_zone_by_postal_code(code)
                .await?
        }
        _ => None,
    };
    let effective_postal = delivery_address.as_ref().and(postal_code.as_deref());
    let priced = checkout::price_order(lines, effective_postal, zone.as_ref())?;

    let new_order = NewOrder {
        order_number: checkout::generate_order_number(Utc::now().date_naive()),
        customer_name,
        customer_email,
        customer_phone,
        delivery_address,
        postal_code,
        notes: body.notes.filter(|n| !n.trim().is_empty()),
        subtotal: priced.subtotal,
        delivery_fee: priced.delivery_fee,
        total: priced.total,
        client_ip: client_ip.map(|ip| ip.to_string()),
        lines: priced.lines,
    };

    let (order, items) = OrderRepository::new(state.pool()).create(&new_order).await?;

    tracing::info!(
        order_number = %order.order_number,
        total = %order.total,
        items = items.len(),
        "Order created"
    );

    // Fire the notifications without holding up the response.
    let mailer_state = state.clone();
    let mail_order = order.clone();
    let mail_items = items.clone();
    tokio::spawn(async move {
        if let Err(e) = mailer_state
            .email()
            .send_order_confirmation(&mail_order, &mail_items)
            .await
        {
            tracing::error!(order_number = %mail_order.order_number, error = %e, "Confirmation email failed");
        }
        if let Err(e) = mailer_state
            .email()
            .send_order_received(&mail_order, &mail_items)
            .await
        {
            tracing::error!(order_number = %mail_order.order_number, error = %e, "Restaurant notification failed");
        }
    });

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(OrderPayload { order, items })),
    ))
}

/// Look up an order by its public order number.
pub async fn show_order(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> Result<Json<ApiResponse<OrderPayload>>> {
    let (order, items) = OrderRepository::new(state.pool())
        .get_by_order_number(&order_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order '{order_number}'")))?;

    Ok(Json(ApiResponse::ok(OrderPayload { order, items })))
}
