//! Authentication module.
//!
//! Login checks credentials against the user directory and issues an access
//! token; `/me` resolves a verified token back to the stored account.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
