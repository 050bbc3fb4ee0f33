use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::middleware::role::require_admin;
use crate::modules::auth::router::{init_auth_router, init_auth_session_router};
use crate::modules::campaigns::router::init_campaigns_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router.
///
/// Route guarding happens here rather than in the per-module routers:
/// `/auth/login` is public, `/auth/me` and `/campaigns` require a valid
/// token, `/users` additionally requires the Admin role. Within
/// `/campaigns`, write handlers gate themselves further with extractor
/// guards since the subtree mixes role tiers.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/auth",
                    init_auth_router().merge(init_auth_session_router().route_layer(
                        middleware::from_fn_with_state(state.clone(), authenticate),
                    )),
                )
                .nest(
                    "/users",
                    // Layers run outermost-first, so authenticate (added last)
                    // attaches the identity before require_admin checks it.
                    init_users_router()
                        .route_layer(middleware::from_fn(require_admin))
                        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
                )
                .nest(
                    "/campaigns",
                    init_campaigns_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
                ),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
