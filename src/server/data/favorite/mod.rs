//! Favorite link repositories.
//!
//! One repository per join table. Favorite links are plain rows pairing a user with a
//! catalog entity, duplicates are permitted. Character and planet links outlive their
//! owning user with a null `user_id`, vehicle links are removed together with the user.

pub mod character;
pub mod planet;
pub mod vehicle;
