//! Role-based authorization middleware.
//!
//! Two forms are provided on top of the same gate:
//!
//! 1. Layer-based middleware (`require_roles` and its named wrappers) for
//!    guarding whole route subtrees
//! 2. Extractor guards (`RequireAdmin`, `RequireGamemaster`) for gating
//!    individual handlers where a subtree mixes role tiers
//!
//! Every form reads the [`CurrentUser`] identity attached by
//! [`authenticate`](crate::middleware::auth::authenticate) and never
//! verifies tokens itself.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use questlog_auth::UserRole;
use questlog_core::AppError;

use crate::middleware::auth::CurrentUser;

/// The authorization gate.
///
/// - No identity: the request never passed authentication, 401
/// - Empty allowed set: the route is open to any authenticated user
/// - Identity role in the allowed set: authorized
/// - Otherwise: 403
pub fn check_roles(
    identity: Option<&CurrentUser>,
    allowed_roles: &[UserRole],
) -> Result<(), AppError> {
    let user = identity.ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    if allowed_roles.is_empty() {
        return Ok(());
    }

    if allowed_roles.contains(&user.role()) {
        Ok(())
    } else {
        Err(AppError::forbidden("Insufficient permissions"))
    }
}

/// Middleware form of [`check_roles`].
///
/// # Usage with `axum::middleware::from_fn`
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use questlog_auth::UserRole;
///
/// let gm_routes = Router::new()
///     .route("/campaigns", post(create_campaign))
///     .layer(middleware::from_fn(|req, next| {
///         require_roles(req, next, vec![UserRole::Admin, UserRole::Gamemaster])
///     }));
/// ```
pub async fn require_roles(
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    check_roles(req.extensions().get::<CurrentUser>(), &allowed_roles)?;
    Ok(next.run(req).await)
}

/// Admin-only routes.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
///
/// let admin_routes = Router::new()
///     .route("/users", get(get_users))
///     .route_layer(middleware::from_fn(require_admin));
/// ```
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, vec![UserRole::Admin]).await
}

/// Routes open to campaign organizers (Admin or Gamemaster).
pub async fn require_gamemaster(req: Request, next: Next) -> Result<Response, AppError> {
    require_roles(req, next, vec![UserRole::Admin, UserRole::Gamemaster]).await
}

/// Extractor guard for admin-only handlers. Carries the identity so the
/// handler can use it without extracting twice.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn delete_campaign(
///     RequireAdmin(user): RequireAdmin,
///     Path(id): Path<Uuid>,
/// ) -> Result<StatusCode, AppError> {
///     // Only admins reach this point
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        check_roles(Some(&user), &[UserRole::Admin])?;

        Ok(RequireAdmin(user))
    }
}

/// Extractor guard for handlers open to Admin or Gamemaster.
#[derive(Debug, Clone)]
pub struct RequireGamemaster(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireGamemaster
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        check_roles(Some(&user), &[UserRole::Admin, UserRole::Gamemaster])?;

        Ok(RequireGamemaster(user))
    }
}
