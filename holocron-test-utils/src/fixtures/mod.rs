//! Test fixture modules for database record creation.
//!
//! - `user` - Holocron user records
//! - `catalog` - Characters, vehicles and planets
//! - `favorite` - Favorite links between users and catalog entities

pub mod catalog;
pub mod favorite;
pub mod user;
