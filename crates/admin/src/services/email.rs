//! Email service for order status notifications.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates. The
//! dashboard sends one message per status change, to the customer.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use osteria_core::OrderStatus;
use osteria_core::models::Order;

use crate::config::EmailConfig;

/// HTML template for the status update email.
#[derive(Template)]
#[template(path = "email/status_update.html")]
struct StatusUpdateHtml<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    message: &'a str,
}

/// Plain text template for the status update email.
#[derive(Template)]
#[template(path = "email/status_update.txt")]
struct StatusUpdateText<'a> {
    order_number: &'a str,
    customer_name: &'a str,
    message: &'a str,
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

/// Email service for dashboard notifications.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
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
        })
    }

    /// Send a status update to the order's customer.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to render or send.
    pub async fn send_status_update(
        &self,
        order: &Order,
        status: OrderStatus,
    ) -> Result<(), EmailError> {
        let message = status_message(status, order.is_delivery());
        let html = StatusUpdateHtml {
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            message,
        }
        .render()?;
        let text = StatusUpdateText {
            order_number: &order.order_number,
            customer_name: &order.customer_name,
            message,
        }
        .render()?;

        let subject = format!("Order {}: {}", order.order_number, status_subject(status));
        self.send_multipart_email(order.customer_email.as_str(), &subject, &text, &html)
            .await
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

/// Subject line fragment per status.
const fn status_subject(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "received",
        OrderStatus::Confirmed => "confirmed",
        OrderStatus::Preparing => "in preparation",
        OrderStatus::Ready => "ready",
        OrderStatus::Delivered => "delivered",
        OrderStatus::Cancelled => "cancelled",
    }
}

/// Body message per status. `Ready` reads differently for delivery
/// versus pickup orders.
const fn status_message(status: OrderStatus, is_delivery: bool) -> &'static str {
    match status {
        OrderStatus::Pending => "We have received your order.",
        OrderStatus::Confirmed => "Your order is confirmed and queued for the kitchen.",
        OrderStatus::Preparing => "The kitchen has started preparing your order.",
        OrderStatus::Ready => {
            if is_delivery {
                "Your order is ready and the courier is on the way."
            } else {
                "Your order is ready for pickup at the restaurant."
            }
        }
        OrderStatus::Delivered => "Your order has been delivered. Buon appetito!",
        OrderStatus::Cancelled => {
            "Your order has been cancelled. If this is unexpected, please call us."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_message_depends_on_delivery() {
        assert!(status_message(OrderStatus::Ready, true).contains("courier"));
        assert!(status_message(OrderStatus::Ready, false).contains("pickup"));
    }

    #[test]
    fn test_every_status_has_subject_and_message() {
        for status in OrderStatus::ALL {
            assert!(!status_subject(status).is_empty());
            assert!(!status_message(status, true).is_empty());
        }
    }
}
