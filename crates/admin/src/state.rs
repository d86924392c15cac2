//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::config::AdminConfig;
use crate::services::{EmailService, StorageClient, StorageError};

/// Error creating application state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("smtp configuration error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("storage configuration error: {0}")]
    Storage(#[from] StorageError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool and service clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    email: EmailService,
    storage: StorageClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP relay or storage client cannot be
    /// configured.
    pub fn new(config: AdminConfig, pool: PgPool) -> Result<Self, StateError> {
        let email = EmailService::new(&config.email)?;
        let storage = StorageClient::new(&config.storage)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                email,
                storage,
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the email service.
    #[must_use]
    pub fn email(&self) -> &EmailService {
        &self.inner.email
    }

    /// Get a reference to the storage client.
    #[must_use]
    pub fn storage(&self) -> &StorageClient {
        &self.inner.storage
    }
}
