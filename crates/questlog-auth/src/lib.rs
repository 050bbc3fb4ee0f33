//! # Questlog Auth
//!
//! Authentication types and JWT utilities for the Questlog API.
//!
//! This crate provides:
//!
//! - [`claims`]: The identity claim set embedded in access tokens, and the
//!   closed set of user roles
//! - [`jwt`]: The [`TokenCodec`] that signs and verifies access tokens
//!
//! # Example
//!
//! ```ignore
//! use questlog_auth::{TokenCodec, UserRole};
//! use questlog_config::JwtConfig;
//!
//! let codec = TokenCodec::from_config(&JwtConfig::from_env());
//!
//! // Issue an access token
//! let token = codec.create_access_token(
//!     user_id,
//!     "morgana",
//!     "morgana@example.com",
//!     UserRole::Gamemaster,
//! )?;
//!
//! // Verify the token
//! let claims = codec.verify_token(&token)?;
//! println!("User ID: {}", claims.id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, UserRole};
pub use jwt::TokenCodec;
