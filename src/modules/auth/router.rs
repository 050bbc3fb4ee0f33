use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{get_me, login_user};

/// Routes reachable without a token.
pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login_user))
}

/// Routes the main router wraps in the `authenticate` layer.
pub fn init_auth_session_router() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}
