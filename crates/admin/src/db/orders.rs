//! Order repository for the dashboard: listing, detail, status updates.

use sqlx::PgPool;

use osteria_core::models::{Order, OrderItem};
use osteria_core::{OrderId, OrderStatus};

use super::RepositoryError;

const COLUMNS: &str = "id, order_number, status, customer_name, customer_email, \
                       customer_phone, delivery_address, postal_code, notes, subtotal, \
                       delivery_fee, total, client_ip, created_at, updated_at";

/// Page size for the dashboard order list.
pub const PAGE_SIZE: i64 = 25;

/// One page of orders plus the total row count for the filter.
#[derive(Debug, Clone)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub total: i64,
}

/// Repository for dashboard order management.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of orders, newest first, optionally filtered by status.
    ///
    /// `page` is 1-based; out-of-range pages return an empty list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list(
        &self,
        status: Option<OrderStatus>,
        page: i64,
    ) -> Result<OrderPage, RepositoryError> {
        let offset = (page.max(1) - 1) * PAGE_SIZE;

        let (orders, total) = match status {
            Some(status) => {
                let orders = sqlx::query_as::<_, Order>(&format!(
                    "SELECT {COLUMNS} FROM osteria.orders WHERE status = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3"
                ))
                .bind(status)
                .bind(PAGE_SIZE)
                .bind(offset)
                .fetch_all(self.pool)
                .await?;

                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM osteria.orders WHERE status = $1")
                        .bind(status)
                        .fetch_one(self.pool)
                        .await?;

                (orders, total)
            }
            None => {
                let orders = sqlx::query_as::<_, Order>(&format!(
                    "SELECT {COLUMNS} FROM osteria.orders \
                     ORDER BY created_at DESC LIMIT $1 OFFSET $2"
                ))
                .bind(PAGE_SIZE)
                .bind(offset)
                .fetch_all(self.pool)
                .await?;

                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM osteria.orders")
                    .fetch_one(self.pool)
                    .await?;

                (orders, total)
            }
        };

        Ok(OrderPage { orders, total })
    }

    /// One order with its items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_with_items(
        &self,
        id: OrderId,
    ) -> Result<Option<(Order, Vec<OrderItem>)>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {COLUMNS} FROM osteria.orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, product_name, unit_price, quantity, line_total \
             FROM osteria.order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order.id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some((order, items)))
    }

    /// Set an order's status.
    ///
    /// The caller is responsible for the whitelist and terminal-state
    /// checks; this just writes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for an unknown ID.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            r"
            UPDATE osteria.orders
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?;

        order.ok_or(RepositoryError::NotFound)
    }
}
