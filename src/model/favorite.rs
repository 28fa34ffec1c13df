use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{character::CharacterDto, planet::PlanetDto, vehicle::VehicleDto};

/// The kind of catalog entity a favorite link points to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteKind {
    Character,
    Vehicle,
    Planet,
}

impl FavoriteKind {
    /// Capitalized name of the kind for human readable messages
    pub fn title(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
            Self::Planet => "Planet",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Vehicle => write!(f, "vehicle"),
            Self::Planet => write!(f, "planet"),
        }
    }
}

/// Every entity a user marked as favorite, one entry per favorite link
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoritesDto {
    pub favorite_characters: Vec<CharacterDto>,
    pub favorite_vehicles: Vec<VehicleDto>,
    pub favorite_planets: Vec<PlanetDto>,
}

/// A favorite link that was just created along with the display name of its target
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedFavoriteDto {
    pub id: i32,
    pub kind: FavoriteKind,
    pub user_id: i32,
    pub target_id: i32,
    pub target_name: String,
}

/// Response body after adding a favorite
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteAddedDto {
    pub msg: String,
    /// ID of the favorite link, required to remove the favorite later
    pub favorite_id: i32,
}

/// A raw favorite link row
///
/// `user_id` is `None` for character & planet favorites whose owning user was deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteLinkDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub target_id: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteCharacterDto {
    pub character_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteVehicleDto {
    pub vehicle_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct AddFavoritePlanetDto {
    pub planet_id: Option<i32>,
}
