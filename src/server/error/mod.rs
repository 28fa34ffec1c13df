//! Error types for the Holocron server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, request bodies, catalog resources). All errors implement
//! `IntoResponse` for Axum HTTP responses with a `{"msg": ...}` body and use `thiserror`
//! for ergonomic error definitions.

pub mod config;
pub mod request;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, request::RequestError, resource::ResourceError},
};

/// Main error type for the Holocron server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Request errors (missing or malformed body, missing required fields)
/// - Resource errors (unknown IDs, driver assignment conflicts)
/// - External library errors (database, password hashing, socket binding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request error (missing body or required field).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Resource error (entity or favorite link not found, conflicting references).
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error with Holocron's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the HTTP listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For missing or malformed request bodies and missing required fields
/// - 404 Not Found - For unknown users, catalog entities and favorite links
/// - 409 Conflict - For unique constraint violations and conflicting driver assignments
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(constraint)) => {
                    tracing::debug!(constraint = %constraint, "Unique constraint violation");

                    (
                        StatusCode::CONFLICT,
                        Json(ErrorDto {
                            msg: "A record with the same unique value already exists".to_string(),
                        }),
                    )
                        .into_response()
                }
                _ => InternalServerError(err).into_response(),
            },
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                msg: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status & message.
pub(crate) fn error_response(status: StatusCode, msg: impl Into<String>) -> Response {
    (status, Json(ErrorDto { msg: msg.into() })).into_response()
}
