//! Session authentication handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tower_sessions::Session;

use osteria_core::{ApiResponse, Email};

use crate::db::AdminUserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::models::{CurrentAdmin, session_keys};
use crate::services::auth::{AuthError, verify_password};
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Log in with email and password.
///
/// On success the admin is stored in the session and returned. Lookup
/// failure and password mismatch are indistinguishable to the client.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<CurrentAdmin>>> {
    let email = Email::parse(&body.email)
        .map_err(|_| AppError::Auth(AuthError::InvalidCredentials))?;

    let repo = AdminUserRepository::new(state.pool());
    let user = repo
        .get_by_email(&email)
        .await?
        .ok_or(AppError::Auth(AuthError::InvalidCredentials))?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::Auth(AuthError::InvalidCredentials));
    }

    if !user.is_active {
        return Err(AppError::Auth(AuthError::InactiveAccount));
    }

    // Rotate the session ID on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    let current = CurrentAdmin::from(&user);
    session
        .insert(session_keys::CURRENT_ADMIN, current.clone())
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    repo.touch_last_login(user.id).await?;

    tracing::info!(admin = %current.email, "Admin logged in");
    Ok(Json(ApiResponse::ok(current)))
}

/// Log out, destroying the session.
pub async fn logout(session: Session) -> Result<Json<ApiResponse<()>>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("session error: {e}")))?;

    Ok(Json(ApiResponse::ok(())))
}

/// Return the logged-in admin.
pub async fn me(
    RequireAdminAuth(admin): RequireAdminAuth,
) -> Json<ApiResponse<CurrentAdmin>> {
    Json(ApiResponse::ok(admin))
}
