use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        controller::util::json::{DeferredJsonBody, JsonBody},
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

pub static PLANET_TAG: &str = "planets";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = ListDto<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_all_planets().await?;

    Ok((StatusCode::OK, Json(ListDto::from(planets))))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetService::new(&state.db).get_planet(planet_id).await? else {
        return Err(ResourceError::PlanetNotFound(planet_id).into());
    };

    Ok((StatusCode::OK, Json(planet)))
}

#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing body or name", body = ErrorDto),
        (status = 409, description = "Planet name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(planet): JsonBody<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create_planet(planet).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "Planet updated", body = PlanetDto),
        (status = 400, description = "Missing body", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 409, description = "Planet name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    body: DeferredJsonBody<UpdatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    if planet_service.get_planet(planet_id).await?.is_none() {
        return Err(ResourceError::PlanetNotFound(planet_id).into());
    }

    let planet = planet_service
        .update_planet(planet_id, body.into_inner()?)
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a planet along with every favorite link targeting it
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Planet deleted"))))
}
