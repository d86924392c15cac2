//! Authentication extractors for the admin API.
//!
//! The dashboard is a JSON API, so every rejection is an envelope
//! response: 401 when not logged in, 403 when the role is insufficient.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use osteria_core::ApiResponse;

use crate::models::{CurrentAdmin, session_keys};

/// Rejection for the auth extractors.
pub enum AuthRejection {
    /// No valid session.
    Unauthorized,
    /// Logged in, but the role does not allow the operation.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<()>::err("authentication required")),
            )
                .into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<()>::err("insufficient permissions")),
            )
                .into_response(),
        }
    }
}

/// Read the current admin out of the request's session.
async fn current_admin(parts: &mut Parts) -> Option<CurrentAdmin> {
    let session = parts.extensions.get::<Session>()?;
    session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}

/// Extractor that requires a logged-in admin (any role).
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireAdminAuth(admin): RequireAdminAuth) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_admin(parts)
            .await
            .map(Self)
            .ok_or(AuthRejection::Unauthorized)
    }
}

/// Extractor that requires a role allowed to mutate data.
///
/// Viewers get 403 from every mutating endpoint through this extractor.
pub struct RequireWriteAccess(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireWriteAccess
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts)
            .await
            .ok_or(AuthRejection::Unauthorized)?;

        if admin.role.can_write() {
            Ok(Self(admin))
        } else {
            Err(AuthRejection::Forbidden)
        }
    }
}
