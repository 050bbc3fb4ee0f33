use questlog_auth::{TokenCodec, UserRole};
use questlog_config::{AdminConfig, CorsConfig, JwtConfig};
use questlog_core::hash_password;
use tracing::{info, warn};

use crate::modules::campaigns::store::CampaignStore;
use crate::modules::users::directory::UserDirectory;
use crate::modules::users::model::User;

#[derive(Clone)]
pub struct AppState {
    pub token_codec: TokenCodec,
    pub users: UserDirectory,
    pub campaigns: CampaignStore,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    let state = AppState {
        token_codec: TokenCodec::from_config(&JwtConfig::from_env()),
        users: UserDirectory::new(),
        campaigns: CampaignStore::new(),
        cors_config: CorsConfig::from_env(),
    };

    seed_admin(&state, AdminConfig::from_env());

    state
}

/// Seeds the bootstrap admin account so a fresh deployment can log in.
///
/// [`init_app_state`] passes the env-derived config; when `admin` is `None`
/// (`ADMIN_USERNAME`/`ADMIN_EMAIL`/`ADMIN_PASSWORD` unset) the directory
/// starts empty and every login fails until accounts are created.
pub fn seed_admin(state: &AppState, admin: Option<AdminConfig>) {
    let Some(admin) = admin else {
        warn!("No bootstrap admin configured (ADMIN_USERNAME/ADMIN_EMAIL/ADMIN_PASSWORD unset)");
        return;
    };

    let password_hash =
        hash_password(&admin.password).expect("Failed to hash bootstrap admin password");

    let user = User::new(admin.username, admin.email, UserRole::Admin, password_hash);
    match state.users.insert(user) {
        Ok(user) => info!(username = %user.username, "Seeded bootstrap admin account"),
        Err(e) => warn!(error = %e.message, "Failed to seed bootstrap admin account"),
    }
}
