//! # Questlog Core
//!
//! Core types, errors, and utilities for the Questlog API.
//!
//! This crate provides foundational types used throughout the Questlog application:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`password`]: Secure password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use questlog_core::errors::AppError;
//! use questlog_core::password::{hash_password, verify_password};
//!
//! // Create an error
//! let error = AppError::not_found("Campaign not found");
//!
//! // Hash a password
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
