//! Order management handlers.
//!
//! The dashboard polls the list endpoint; the status endpoint is the one
//! place order state changes after checkout.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use osteria_core::models::{Order, OrderItem};
use osteria_core::{ApiResponse, OrderId, OrderStatus};

use crate::db::OrderRepository;
use crate::db::orders::PAGE_SIZE;
use crate::error::{AppError, Result};
use crate::middleware::{RequireAdminAuth, RequireWriteAccess};
use crate::state::AppState;

/// Query parameters for the order list.
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    /// Status filter (whitelisted; unknown values are 400).
    pub status: Option<String>,
    /// 1-based page number.
    pub page: Option<i64>,
}

/// Order list payload with paging metadata.
#[derive(Debug, Serialize)]
pub struct OrderListPayload {
    pub orders: Vec<Order>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

/// Order detail payload.
#[derive(Debug, Serialize)]
pub struct OrderPayload {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// List orders, newest first, optionally filtered by status.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<ApiResponse<OrderListPayload>>> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<OrderStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let page = query.page.unwrap_or(1).max(1);
    let result = OrderRepository::new(state.pool()).list(status, page).await?;

    Ok(Json(ApiResponse::ok(OrderListPayload {
        orders: result.orders,
        page,
        per_page: PAGE_SIZE,
        total: result.total,
    })))
}

/// Show one order with its items.
pub async fn show(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<ApiResponse<OrderPayload>>> {
    let (order, items) = OrderRepository::new(state.pool())
        .get_with_items(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(Json(ApiResponse::ok(OrderPayload { order, items })))
}

/// Status update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Change an order's status.
///
/// The status string is whitelist-checked, terminal orders reject any
/// further change, and the customer is notified of the new status. A
/// repeated identical status is a no-op without an email.
pub async fn update_status(
    RequireWriteAccess(admin): RequireWriteAccess,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<Order>>> {
    let new_status: OrderStatus = body.status.parse().map_err(AppError::BadRequest)?;

    let repo = OrderRepository::new(state.pool());
    let (current, _) = repo
        .get_with_items(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    if current.status == new_status {
        return Ok(Json(ApiResponse::ok(current)));
    }

    if current.status.is_terminal() {
        return Err(AppError::Conflict(format!(
            "order is already {}",
            current.status
        )));
    }

    let order = repo.update_status(id, new_status).await?;

    tracing::info!(
        admin = %admin.email,
        order_number = %order.order_number,
        from = %current.status,
        to = %new_status,
        "Order status changed"
    );

    // Notify the customer off-request; a mail failure never rolls back
    // the status change. `pending` is the checkout state and already
    // covered by the confirmation email, so moving back to it is silent.
    if new_status == OrderStatus::Pending {
        return Ok(Json(ApiResponse::ok(order)));
    }

    let mailer_state = state.clone();
    let mail_order = order.clone();
    tokio::spawn(async move {
        if let Err(e) = mailer_state
            .email()
            .send_status_update(&mail_order, new_status)
            .await
        {
            tracing::error!(
                order_number = %mail_order.order_number,
                error = %e,
                "Status update email failed"
            );
        }
    });

    Ok(Json(ApiResponse::ok(order)))
}
