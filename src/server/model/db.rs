//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, a single point of reference for database model types
//! without importing from the `entity` crate directly.

/// Type alias for a user account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `user_name` - Optional display name
/// - `email` - Unique email address
/// - `password_hash` - Argon2id PHC string of the user's password
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for a catalog character.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `first_name` - First name
/// - `last_name` - Last name (nullable)
/// - `specie` - Species of the character
/// - `height` - Height (nullable)
pub type CharacterModel = entity::character::Model;

/// Type alias for a catalog vehicle.
///
/// # Fields (from `entity::vehicle::Model`)
/// - `id` - Primary key
/// - `name` - Unique vehicle name
/// - `max_speed` - Maximum speed (nullable)
/// - `driver_id` - Unique foreign key to the character driving it (nullable)
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for a catalog planet.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key
/// - `name` - Unique planet name
/// - `population` - Population (nullable)
/// - `climate` - Climate description (nullable)
pub type PlanetModel = entity::planet::Model;

/// Type alias for a favorite character link.
///
/// `user_id` is cleared when the owning user is deleted.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for a favorite vehicle link, deleted along with its owning user.
pub type FavoriteVehicleModel = entity::favorite_vehicle::Model;

/// Type alias for a favorite planet link.
///
/// `user_id` is cleared when the owning user is deleted.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
