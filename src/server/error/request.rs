use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum RequestError {
    /// The body is absent, is not JSON, or does not match the expected shape
    #[error("The request body must be a valid JSON object")]
    MissingBody,
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Vehicle lookups by ID report an unknown vehicle as a bad request rather than 404
    #[error("Vehicle with ID {0} does not exist")]
    UnknownVehicle(i32),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}
