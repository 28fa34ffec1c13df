//! Holocron, a REST API over a Star Wars catalog of characters, vehicles and planets
//! with per-user favorites.

pub mod model;
pub mod server;
