use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use questlog_auth::TokenCodec;
use questlog_core::{AppError, verify_password};

use crate::modules::users::directory::UserDirectory;
use crate::modules::users::model::UserProfile;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Checks credentials and issues an access token.
    ///
    /// An unknown username and a wrong password produce the same 401 so the
    /// endpoint cannot be used to probe which usernames exist.
    #[instrument(skip(users, codec, dto), fields(user.username = %dto.username))]
    pub fn login(
        users: &UserDirectory,
        codec: &TokenCodec,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let user = users.find_by_username(&dto.username).ok_or_else(|| {
            debug!("Login attempt for unknown username");
            AppError::unauthorized("Invalid username or password")
        })?;

        if !verify_password(&dto.password, &user.password_hash)? {
            warn!(user.id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let access_token = codec.create_access_token(user.id, &user.username, &user.email, user.role)?;

        info!(user.id = %user.id, user.role = ?user.role, "Login successful");

        Ok(LoginResponse {
            access_token,
            user: UserProfile::from(user),
        })
    }

    /// Resolves an authenticated identity to its stored profile.
    #[instrument(skip(users))]
    pub fn current_profile(users: &UserDirectory, user_id: Uuid) -> Result<UserProfile, AppError> {
        users
            .get(&user_id)
            .map(UserProfile::from)
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
