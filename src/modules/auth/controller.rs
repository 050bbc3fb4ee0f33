use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use questlog_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::UserProfile;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;

/// The body every rejected request carries.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// Login and receive a JWT access token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.users, &state.token_codec, dto)?;
    Ok(Json(response))
}

/// Get the account behind the presented token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current account profile", body = UserProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, user))]
pub async fn get_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserProfile>, AppError> {
    let profile = AuthService::current_profile(&state.users, user.user_id())?;
    Ok(Json(profile))
}
