//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - Full account record held in the directory, including the
//!   password hash
//! - [`UserProfile`] - Public view of an account, returned by the API
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`] - Create a new account (admin only)

use chrono::{DateTime, Utc};
use questlog_auth::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An account in the user directory.
///
/// The full record carries the bcrypt password hash and is never serialized
/// to clients; responses use [`UserProfile`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a new account with a fresh id and creation timestamp.
    pub fn new(username: String, email: String, role: UserRole, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            role,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new account.
///
/// Only admins can create accounts; the role is assigned at creation and
/// carried in every token the account logs in with.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 3))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: UserRole,
}
