use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub msg: String,
}

/// A human readable confirmation for operations without a resource to return
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Envelope for every list response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDto<T> {
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for ListDto<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}
