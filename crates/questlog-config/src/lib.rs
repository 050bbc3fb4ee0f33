//! # Questlog Config
//!
//! Configuration types for the Questlog API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`admin`]: Bootstrap administrator account configuration
//!
//! # Example
//!
//! ```ignore
//! use questlog_config::{AdminConfig, CorsConfig, JwtConfig};
//!
//! // Load all configs from environment
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let admin_config = AdminConfig::from_env();
//! ```

pub mod admin;
pub mod cors;
pub mod jwt;

// Re-export commonly used types at crate root
pub use admin::AdminConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
