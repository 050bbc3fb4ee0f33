//! # Questlog API
//!
//! A REST API built with Rust and Axum for managing tabletop RPG campaigns,
//! with JWT-based authentication and role-based access control.
//!
//! ## Overview
//!
//! Questlog is the backend for a campaign management service for tabletop
//! groups:
//!
//! - **Authentication**: JWT access tokens carrying the full identity, so
//!   requests are authorized without a directory lookup
//! - **Role-Based Access Control**: A closed set of roles (Admin,
//!   Gamemaster, Player) checked by middleware and extractor guards
//! - **Campaign Management**: Create, browse, and edit campaigns with
//!   per-tier permissions
//! - **User Management**: Admin-only account creation and listing
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! crates/
//! ├── questlog-core/    # AppError, password hashing
//! ├── questlog-config/  # Environment-driven configuration
//! └── questlog-auth/    # Claims, roles, token codec
//! src/
//! ├── middleware/       # Authentication and role middleware
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login and session
//! │   ├── users/       # Account directory and management
//! │   └── campaigns/   # Campaign CRUD
//! ├── docs.rs           # OpenAPI documentation setup
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Roles
//!
//! | Role | Description |
//! |------|-------------|
//! | Admin | Full access, manages accounts, deletes campaigns |
//! | Gamemaster | Runs tables, creates and edits campaigns |
//! | Player | Browses campaigns and their own profile |
//!
//! Reads under `/api/campaigns` are open to any authenticated user. Campaign
//! creation and editing require Admin or Gamemaster, campaign deletion and
//! everything under `/api/users` require Admin.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ADMIN_USERNAME=admin
//! ADMIN_EMAIL=admin@example.com
//! ADMIN_PASSWORD=change-me
//! ALLOWED_ORIGINS=http://localhost:5173
//! ```
//!
//! The `ADMIN_*` variables seed a bootstrap admin account at startup; without
//! them a fresh deployment has no way to log in.
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Security Considerations
//!
//! - Passwords are hashed using bcrypt
//! - JWT secrets should be cryptographically random
//! - Login failures do not reveal whether the username exists
//! - Token verification failures do not reveal why the token was rejected

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use questlog_auth;
pub use questlog_config;
pub use questlog_core;
