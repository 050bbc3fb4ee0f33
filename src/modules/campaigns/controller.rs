use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use questlog_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::middleware::role::{RequireAdmin, RequireGamemaster};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::campaigns::model::{Campaign, CreateCampaignDto, UpdateCampaignDto};
use crate::modules::campaigns::service::CampaignService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List campaigns, newest first
#[utoipa::path(
    get,
    path = "/api/campaigns",
    responses(
        (status = 200, description = "List of campaigns, newest first", body = Vec<Campaign>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Campaigns"
)]
#[instrument(skip(state))]
pub async fn get_campaigns(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Json<Vec<Campaign>>, AppError> {
    Ok(Json(CampaignService::get_campaigns(&state.campaigns)))
}

/// Fetch a single campaign by id
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    responses(
        (status = 200, description = "Campaign found", body = Campaign),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Campaign not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Campaigns"
)]
#[instrument(skip(state))]
pub async fn get_campaign(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, AppError> {
    let campaign = CampaignService::get_campaign(&state.campaigns, id)?;
    Ok(Json(campaign))
}

/// Create a campaign (admin or gamemaster)
#[utoipa::path(
    post,
    path = "/api/campaigns",
    request_body = CreateCampaignDto,
    responses(
        (status = 201, description = "Campaign created successfully", body = Campaign),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin or Gamemaster only", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Campaigns"
)]
#[instrument(skip(state, dto))]
pub async fn create_campaign(
    State(state): State<AppState>,
    RequireGamemaster(user): RequireGamemaster,
    ValidatedJson(dto): ValidatedJson<CreateCampaignDto>,
) -> Result<(StatusCode, Json<Campaign>), AppError> {
    let campaign = CampaignService::create_campaign(&state.campaigns, user.user_id(), dto)?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// Update a campaign (admin or gamemaster)
#[utoipa::path(
    put,
    path = "/api/campaigns/{id}",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    request_body = UpdateCampaignDto,
    responses(
        (status = 200, description = "Campaign updated successfully", body = Campaign),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin or Gamemaster only", body = ErrorResponse),
        (status = 404, description = "Campaign not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Campaigns"
)]
#[instrument(skip(state, dto))]
pub async fn update_campaign(
    State(state): State<AppState>,
    RequireGamemaster(_user): RequireGamemaster,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCampaignDto>,
) -> Result<Json<Campaign>, AppError> {
    let campaign = CampaignService::update_campaign(&state.campaigns, id, dto)?;
    Ok(Json(campaign))
}

/// Delete a campaign (admin only)
#[utoipa::path(
    delete,
    path = "/api/campaigns/{id}",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    responses(
        (status = 204, description = "Campaign deleted successfully"),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - Admin only", body = ErrorResponse),
        (status = 404, description = "Campaign not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Campaigns"
)]
#[instrument(skip(state))]
pub async fn delete_campaign(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CampaignService::delete_campaign(&state.campaigns, id)?;
    Ok(StatusCode::NO_CONTENT)
}
