use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use questlog_auth::{Claims, UserRole};
use questlog_core::AppError;
use uuid::Uuid;

use crate::state::AppState;

/// The authenticated identity attached to a request.
///
/// [`authenticate`] inserts this as a request extension after verifying the
/// bearer token; handlers and role gates read it back. Extracting it on a
/// route that `authenticate` does not cover rejects with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl CurrentUser {
    pub fn user_id(&self) -> Uuid {
        self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Authentication middleware guarding a route subtree.
///
/// Expects an `Authorization: Bearer <token>` header. A missing header, a
/// value without the `Bearer ` prefix, or an empty token is rejected before
/// the codec is ever consulted; a present token that fails verification is
/// rejected with the codec's uniform error. On success the claims travel
/// with the request as a [`CurrentUser`] extension.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(AppError::unauthorized("No token provided")),
    };

    let claims = state.token_codec.verify_token(token)?;
    req.extensions_mut().insert(CurrentUser(claims));

    Ok(next.run(req).await)
}
