use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use questlog_auth::UserRole;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::campaigns::model::{Campaign, CreateCampaignDto, UpdateCampaignDto};
use crate::modules::users::model::{CreateUserDto, UserProfile};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::campaigns::controller::get_campaigns,
        crate::modules::campaigns::controller::get_campaign,
        crate::modules::campaigns::controller::create_campaign,
        crate::modules::campaigns::controller::update_campaign,
        crate::modules::campaigns::controller::delete_campaign,
    ),
    components(
        schemas(
            UserRole,
            UserProfile,
            CreateUserDto,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            Campaign,
            CreateCampaignDto,
            UpdateCampaignDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and session endpoints"),
        (name = "Users", description = "Account management endpoints"),
        (name = "Campaigns", description = "Campaign management endpoints")
    ),
    info(
        title = "Questlog API",
        version = "0.1.0",
        description = "Campaign management backend for tabletop RPG groups, with JWT-based authentication and role-based access control.",
        contact(
            name = "API Support",
            email = "support@questlog.app"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
