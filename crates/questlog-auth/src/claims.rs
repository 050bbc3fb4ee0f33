//! JWT claim structures for authentication tokens.
//!
//! This module contains the identity claim set embedded in access tokens
//! and the closed set of roles a user can hold:
//!
//! - [`Claims`]: Access token claims carrying the full identity
//! - [`UserRole`]: `Admin`, `Gamemaster` or `Player`

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The roles a Questlog account can hold.
///
/// Roles are serialized as lowercase strings (`"admin"`, `"gamemaster"`,
/// `"player"`). Tokens carrying any other role string fail verification
/// because the claims no longer deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Gamemaster,
    Player,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Gamemaster => "gamemaster",
            UserRole::Player => "player",
        }
    }
}

/// JWT claims for access tokens.
///
/// These claims are embedded in access tokens and provide all necessary
/// information for authentication and authorization without a directory
/// lookup.
///
/// # Fields
///
/// - `id`: User ID
/// - `username`: User's display name
/// - `email`: User's email address
/// - `role`: The role the user held when the token was issued
/// - `iat`: Token issued-at timestamp (Unix seconds)
/// - `exp`: Token expiration timestamp (Unix seconds)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID
    pub id: Uuid,
    /// User's display name
    pub username: String,
    /// User's email address
    pub email: String,
    /// Role held at issue time
    pub role: UserRole,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
}
