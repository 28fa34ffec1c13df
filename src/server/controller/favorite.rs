use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{
            AddFavoriteCharacterDto, AddFavoritePlanetDto, AddFavoriteVehicleDto,
            CreatedFavoriteDto, FavoriteAddedDto, FavoriteKind, FavoritesDto,
        },
    },
    server::{
        controller::util::json::DeferredJsonBody,
        error::{request::RequestError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorites";

/// Get every character, vehicle and planet the user marked as favorite
#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

#[utoipa::path(
    post,
    path = "/user/{id}/favorites/people",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = AddFavoriteCharacterDto,
    responses(
        (status = 201, description = "Character added to favorites", body = FavoriteAddedDto),
        (status = 400, description = "Missing body or character_id", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    body: DeferredJsonBody<AddFavoriteCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);
    favorite_service.ensure_user_exists(user_id).await?;

    let character_id = body
        .into_inner()?
        .character_id
        .ok_or(RequestError::MissingField("character_id"))?;

    let favorite = favorite_service
        .add_favorite(user_id, FavoriteKind::Character, character_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite_added(favorite))))
}

#[utoipa::path(
    post,
    path = "/user/{id}/favorites/vehicles",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = AddFavoriteVehicleDto,
    responses(
        (status = 201, description = "Vehicle added to favorites", body = FavoriteAddedDto),
        (status = 400, description = "Missing body or vehicle_id", body = ErrorDto),
        (status = 404, description = "User or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    body: DeferredJsonBody<AddFavoriteVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);
    favorite_service.ensure_user_exists(user_id).await?;

    let vehicle_id = body
        .into_inner()?
        .vehicle_id
        .ok_or(RequestError::MissingField("vehicle_id"))?;

    let favorite = favorite_service
        .add_favorite(user_id, FavoriteKind::Vehicle, vehicle_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite_added(favorite))))
}

#[utoipa::path(
    post,
    path = "/user/{id}/favorites/planets",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = AddFavoritePlanetDto,
    responses(
        (status = 201, description = "Planet added to favorites", body = FavoriteAddedDto),
        (status = 400, description = "Missing body or planet_id", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    body: DeferredJsonBody<AddFavoritePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);
    favorite_service.ensure_user_exists(user_id).await?;

    let planet_id = body
        .into_inner()?
        .planet_id
        .ok_or(RequestError::MissingField("planet_id"))?;

    let favorite = favorite_service
        .add_favorite(user_id, FavoriteKind::Planet, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite_added(favorite))))
}

/// Remove a favorite character link of the user by the link ID
#[utoipa::path(
    delete,
    path = "/user/{id}/favorites/people/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the user"),
        ("favorite_id" = i32, Path, description = "ID of the favorite link")
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = MessageDto),
        (status = 404, description = "User or favorite link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((user_id, favorite_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, FavoriteKind::Character, favorite_id).await
}

#[utoipa::path(
    delete,
    path = "/user/{id}/favorites/vehicles/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the user"),
        ("favorite_id" = i32, Path, description = "ID of the favorite link")
    ),
    responses(
        (status = 200, description = "Vehicle removed from favorites", body = MessageDto),
        (status = 404, description = "User or favorite link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    Path((user_id, favorite_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, FavoriteKind::Vehicle, favorite_id).await
}

#[utoipa::path(
    delete,
    path = "/user/{id}/favorites/planets/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "ID of the user"),
        ("favorite_id" = i32, Path, description = "ID of the favorite link")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "User or favorite link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, favorite_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    remove_favorite(&state, user_id, FavoriteKind::Planet, favorite_id).await
}

async fn remove_favorite(
    state: &AppState,
    user_id: i32,
    kind: FavoriteKind,
    favorite_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, kind, favorite_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "{} removed from favorites",
            kind.title()
        ))),
    ))
}

fn favorite_added(favorite: CreatedFavoriteDto) -> FavoriteAddedDto {
    FavoriteAddedDto {
        msg: format!(
            "{} {} added to favorites",
            favorite.kind.title(),
            favorite.target_name
        ),
        favorite_id: favorite.id,
    }
}
