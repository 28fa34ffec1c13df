use std::convert::Infallible;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::server::error::{request::RequestError, Error};

/// JSON request body extractor
///
/// Behaves like [`Json`] but rejects an absent, malformed or mistyped body with
/// [`RequestError::MissingBody`] so the client receives the API's error shape.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(missing_body(rejection)),
        }
    }
}

/// JSON request body extractor which never rejects the request
///
/// Routes addressing an existing entity look the entity up first and answer 404 before the
/// body is judged. Such handlers call [`DeferredJsonBody::into_inner`] once the lookup passed.
pub struct DeferredJsonBody<T>(Result<T, JsonRejection>);

impl<T> DeferredJsonBody<T> {
    /// Returns the parsed body or [`RequestError::MissingBody`] if it could not be parsed
    pub fn into_inner(self) -> Result<T, Error> {
        self.0.map_err(missing_body)
    }
}

impl<T> From<T> for DeferredJsonBody<T> {
    fn from(value: T) -> Self {
        Self(Ok(value))
    }
}

impl<T, S> FromRequest<S> for DeferredJsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value),
        ))
    }
}

fn missing_body(rejection: JsonRejection) -> Error {
    tracing::debug!(%rejection, "Rejected JSON request body");

    RequestError::MissingBody.into()
}
