use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_present;

/// External representation of a vehicle
///
/// The vehicle ID is not part of the representation, existing clients rely on this shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub name: String,
    pub max_speed: Option<i32>,
    pub driver_id: Option<i32>,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            name: vehicle.name,
            max_speed: vehicle.max_speed,
            driver_id: vehicle.driver_id,
        }
    }
}

/// Request body for creating a vehicle, `name` is required
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub name: Option<String>,
    pub max_speed: Option<i32>,
    /// ID of the character driving the vehicle, a character drives at most one vehicle
    pub driver_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateVehicleDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub max_speed: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub driver_id: Option<Option<i32>>,
}
