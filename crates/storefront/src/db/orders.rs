//! Order repository: checkout writes and status lookup.

use rust_decimal::Decimal;
use sqlx::PgPool;

use osteria_core::models::{Order, OrderItem};
use osteria_core::{Email, OrderStatus, ProductId};

use super::RepositoryError;

/// Everything needed to persist a priced order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: Email,
    pub customer_phone: String,
    pub delivery_address: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub client_ip: Option<String>,
    pub lines: Vec<NewOrderLine>,
}

/// One priced line of a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub line_total: Decimal,
}

/// Repository for order creation and lookup.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an order and its items in one transaction.
    ///
    /// The order starts in `pending` status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` on an order-number collision and
    /// `RepositoryError::Database` for other failures.
    pub async fn create(&self, new: &NewOrder) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO osteria.orders
                (order_number, status, customer_name, customer_email, customer_phone,
                 delivery_address, postal_code, notes, subtotal, delivery_fee, total,
                 client_ip)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, order_number, status, customer_name, customer_email,
                      customer_phone, delivery_address, postal_code, notes,
                      subtotal, delivery_fee, total, client_ip, created_at, updated_at
            ",
        )
        .bind(&new.order_number)
        .bind(OrderStatus::Pending)
        .bind(&new.customer_name)
        .bind(&new.customer_email)
        .bind(&new.customer_phone)
        .bind(&new.delivery_address)
        .bind(&new.postal_code)
        .bind(&new.notes)
        .bind(new.subtotal)
        .bind(new.delivery_fee)
        .bind(new.total)
        .bind(&new.client_ip)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        let mut items = Vec::with_capacity(new.lines.len());
        for line in &new.lines {
            let item = sqlx::query_as::<_, OrderItem>(
                r"
                INSERT INTO osteria.order_items
                    (order_id, product_id, product_name, unit_price, quantity, line_total)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, order_id, product_id, product_name,
                          unit_price, quantity, line_total
                ",
            )
            .bind(order.id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.unit_price)
            .bind(line.quantity)
            .bind(line.line_total)
            .fetch_one(&mut *tx)
            .await?;
            items.push(item);
        }

        tx.commit().await?;

        Ok((order, items))
    }

    /// Look up an order (with items) by its public order number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_by_order_number(
        &self,
        order_number: &str,
    ) -> Result<Option<(Order, Vec<OrderItem>)>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, order_number, status, customer_name, customer_email,
                   customer_phone, delivery_address, postal_code, notes,
                   subtotal, delivery_fee, total, client_ip, created_at, updated_at
            FROM osteria.orders
            WHERE order_number = $1
            ",
        )
        .bind(order_number)
        .fetch_optional(self.pool)
        .await?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, order_id, product_id, product_name,
                   unit_price, quantity, line_total
            FROM osteria.order_items
            WHERE order_id = $1
            ORDER BY id
            ",
        )
        .bind(order.id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some((order, items)))
    }
}

/// Translate a unique-constraint violation into `Conflict`.
fn map_unique_violation(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.message().to_string());
        }
    }
    RepositoryError::Database(err)
}
