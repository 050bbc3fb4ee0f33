//! Middleware modules for request processing.
//!
//! This module contains the authentication and authorization layers that
//! guard the API routes.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token authentication and the [`auth::CurrentUser`]
//!   identity extractor
//! - [`role`]: Role-based authorization gates layered on top of
//!   authentication
//!
//! # Request flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::authenticate`] middleware verifies the token and attaches
//!    the claims to the request as a [`auth::CurrentUser`] extension
//! 3. Role middleware or extractor guards check the attached identity
//!    against the roles a route allows
//! 4. The handler runs if every gate passes
//!
//! Authorization never verifies tokens itself; it only reads the identity
//! that [`auth::authenticate`] attached. A route wrapped in a role gate but
//! not in `authenticate` rejects every request.

pub mod auth;
pub mod role;
