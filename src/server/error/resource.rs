use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::favorite::FavoriteKind, server::error::error_response};

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("User with ID {0} does not exist")]
    UserNotFound(i32),
    #[error("Character with ID {0} does not exist")]
    CharacterNotFound(i32),
    #[error("Vehicle with ID {0} does not exist")]
    VehicleNotFound(i32),
    #[error("Planet with ID {0} does not exist")]
    PlanetNotFound(i32),
    #[error("You don't have a favorite {kind} with ID {favorite_id}")]
    FavoriteNotFound {
        kind: FavoriteKind,
        favorite_id: i32,
    },
    #[error("Character with ID {character_id} already drives vehicle ID {vehicle_id}")]
    DriverAlreadyAssigned { character_id: i32, vehicle_id: i32 },
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::DriverAlreadyAssigned { .. } => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        };

        error_response(status, self.to_string())
    }
}
