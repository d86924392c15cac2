//! Email service for checkout notifications.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates. Two
//! messages go out per order: a confirmation to the customer and a
//! notification to the restaurant inbox.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use thiserror::Error;

use osteria_core::CurrencyCode;
use osteria_core::models::{Order, OrderItem};

use crate::config::EmailConfig;

/// A rendered order line for the templates.
struct OrderLineView {
    name: String,
    quantity: i32,
    line_total: String,
}

/// HTML template for the customer confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.html")]
struct OrderConfirmationHtml<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    lines: Vec<OrderLineView>,
    subtotal: String,
    delivery_fee: String,
    total: String,
    delivery_address: Option<&'a str>,
}

/// Plain text template for the customer confirmation.
#[derive(Template)]
#[template(path = "email/order_confirmation.txt")]
struct OrderConfirmationText<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    lines: Vec<OrderLineView>,
    subtotal: String,
    delivery_fee: String,
    total: String,
    delivery_address: Option<&'a str>,
}

/// HTML template for the restaurant notification.
#[derive(Template)]
#[template(path = "email/order_received.html")]
struct OrderReceivedHtml<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    customer_phone: &'a str,
    customer_email: &'a str,
    lines: Vec<OrderLineView>,
    total: String,
    delivery_address: Option<&'a str>,
    notes: Option<&'a str>,
}

/// Plain text template for the restaurant notification.
#[derive(Template)]
#[template(path = "email/order_received.txt")]
struct OrderReceivedText<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    customer_phone: &'a str,
    customer_email: &'a str,
    lines: Vec<OrderLineView>,
    total: String,
    delivery_address: Option<&'a str>,
    notes: Option<&'a str>,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for checkout notifications.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
    restaurant_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
            restaurant_address: config.restaurant_address.to_string(),
        })
    }

    /// Send the order confirmation to the customer.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to render or send.
    pub async fn send_order_confirmation(
        &self,
        order: &Order,
        items: &[OrderItem],
    ) -> Result<(), EmailError> {
        let lines = line_views(items);
        let html = OrderConfirmationHtml {
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            lines: line_views(items),
            subtotal: format_money(order.subtotal),
            delivery_fee: format_money(order.delivery_fee),
            total: format_money(order.total),
            delivery_address: order.delivery_address.as_deref(),
        }
        .render()?;
        let text = OrderConfirmationText {
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            lines,
            subtotal: format_money(order.subtotal),
            delivery_fee: format_money(order.delivery_fee),
            total: format_money(order.total),
            delivery_address: order.delivery_address.as_deref(),
        }
        .render()?;

        let subject = format!("Your order {} is in the kitchen queue", order.order_number);
        self.send_multipart_email(order.customer_email.as_str(), &subject, &text, &html)
            .await
    }

    /// Send the new-order notification to the restaurant inbox.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to render or send.
    pub async fn send_order_received(
        &self,
        order: &Order,
        items: &[OrderItem],
    ) -> Result<(), EmailError> {
        let html = OrderReceivedHtml {
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            customer_phone: &order.customer_phone,
            customer_email: order.customer_email.as_str(),
            lines: line_views(items),
            total: format_money(order.total),
            delivery_address: order.delivery_address.as_deref(),
            notes: order.notes.as_deref(),
        }
        .render()?;
        let text = OrderReceivedText {
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            customer_phone: &order.customer_phone,
            customer_email: order.customer_email.as_str(),
            lines: line_views(items),
            total: format_money(order.total),
            delivery_address: order.delivery_address.as_deref(),
            notes: order.notes.as_deref(),
        }
        .render()?;

        let subject = format!("New order {}", order.order_number);
        let to = self.restaurant_address.clone();
        self.send_multipart_email(&to, &subject, &text, &html).await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

fn line_views(items: &[OrderItem]) -> Vec<OrderLineView> {
    items
        .iter()
        .map(|item| OrderLineView {
            name: item.product_name.clone(),
            quantity: item.quantity,
            line_total: format_money(item.line_total),
        })
        .collect()
}

/// Render a money amount for email bodies.
fn format_money(amount: Decimal) -> String {
    format!("{}{amount:.2}", CurrencyCode::EUR.symbol())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("12.5".parse().unwrap()), "€12.50");
        assert_eq!(format_money("0".parse().unwrap()), "€0.00");
        assert_eq!(format_money("9.99".parse().unwrap()), "€9.99");
    }
}
