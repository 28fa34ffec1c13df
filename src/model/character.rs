use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_present;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub specie: String,
    pub height: Option<i32>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            first_name: character.first_name,
            last_name: character.last_name,
            specie: character.specie,
            height: character.height,
        }
    }
}

/// Request body for creating a character, `first_name` and `specie` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub specie: Option<String>,
    pub height: Option<i32>,
}

/// Request body for a partial character update
///
/// Nullable columns accept an explicit `null` to clear the stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCharacterDto {
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub last_name: Option<Option<String>>,
    pub specie: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub height: Option<Option<i32>>,
}
