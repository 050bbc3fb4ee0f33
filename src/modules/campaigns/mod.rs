//! Campaign management.
//!
//! Campaigns are the organizing unit for play: a name, the game system at
//! the table, and an optional pitch. Reads are open to any authenticated
//! user. Creation and editing are for organizers (Admin or Gamemaster),
//! deletion is admin only.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod store;
