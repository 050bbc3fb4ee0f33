use tracing::{debug, info, instrument, warn};

use questlog_core::{AppError, hash_password};

use super::directory::UserDirectory;
use super::model::{CreateUserDto, User, UserProfile};

pub struct UserService;

impl UserService {
    #[instrument(skip(users))]
    pub fn get_users(users: &UserDirectory) -> Vec<UserProfile> {
        let profiles: Vec<UserProfile> = users.list().into_iter().map(UserProfile::from).collect();
        debug!(count = profiles.len(), "Listed user accounts");
        profiles
    }

    #[instrument(skip(users, dto), fields(user.username = %dto.username, user.role = ?dto.role))]
    pub fn create_user(users: &UserDirectory, dto: CreateUserDto) -> Result<UserProfile, AppError> {
        let password_hash = hash_password(&dto.password)?;
        let user = User::new(dto.username, dto.email, dto.role, password_hash);

        let user = users.insert(user).inspect_err(|e| {
            warn!(reason = %e.message, "Rejected account creation");
        })?;

        info!(user.id = %user.id, user.username = %user.username, "Account created");
        Ok(UserProfile::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questlog_auth::UserRole;
    use questlog_core::verify_password;

    fn create_dto(username: &str, email: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role: UserRole::Player,
        }
    }

    #[test]
    fn test_create_user_hashes_password() {
        let users = UserDirectory::new();
        let profile =
            UserService::create_user(&users, create_dto("rook", "rook@example.com")).unwrap();

        let stored = users.get(&profile.id).unwrap();
        assert_ne!(stored.password_hash, "password123");
        assert!(verify_password("password123", &stored.password_hash).unwrap());
    }

    #[test]
    fn test_create_user_duplicate_username_rejected() {
        let users = UserDirectory::new();
        UserService::create_user(&users, create_dto("rook", "rook@example.com")).unwrap();

        let err = UserService::create_user(&users, create_dto("rook", "other@example.com"))
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
    }

    #[test]
    fn test_get_users_returns_profiles_in_order() {
        let users = UserDirectory::new();
        UserService::create_user(&users, create_dto("morgana", "morgana@example.com")).unwrap();
        UserService::create_user(&users, create_dto("ash", "ash@example.com")).unwrap();

        let profiles = UserService::get_users(&users);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].username, "ash");
        assert_eq!(profiles[1].username, "morgana");
    }
}
