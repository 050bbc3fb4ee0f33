use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use questlog_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{CreateUserDto, UserProfile};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List every account (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of accounts, ordered by username", body = Vec<UserProfile>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<UserProfile>>, AppError> {
    Ok(Json(UserService::get_users(&state.users)))
}

/// Create a new account (admin only)
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created successfully", body = UserProfile),
        (status = 400, description = "Bad request - duplicate username or email", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    _user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    let profile = UserService::create_user(&state.users, dto)?;
    Ok((StatusCode::CREATED, Json(profile)))
}
