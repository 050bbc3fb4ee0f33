//! User directory module.
//!
//! Accounts live in an in-memory [`directory::UserDirectory`]; listing and
//! creating them is admin-only, enforced at the router level.

pub mod controller;
pub mod directory;
pub mod model;
pub mod router;
pub mod service;
