use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_present;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: Option<i64>,
    pub climate: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            climate: planet.climate,
        }
    }
}

/// Request body for creating a planet, `name` is required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlanetDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i64>)]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub climate: Option<Option<String>>,
}
