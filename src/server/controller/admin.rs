//! Read-only admin listing of raw favorite link rows.
//!
//! Links whose owning user was deleted are listed with a null `user_id`.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ListDto},
        favorite::{FavoriteKind, FavoriteLinkDto},
    },
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

pub static ADMIN_TAG: &str = "admin";

#[utoipa::path(
    get,
    path = "/admin/favorites/people",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Every favorite character link", body = ListDto<FavoriteLinkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorite_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    list_links(&state, FavoriteKind::Character).await
}

#[utoipa::path(
    get,
    path = "/admin/favorites/vehicles",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Every favorite vehicle link", body = ListDto<FavoriteLinkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorite_vehicles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    list_links(&state, FavoriteKind::Vehicle).await
}

#[utoipa::path(
    get,
    path = "/admin/favorites/planets",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Every favorite planet link", body = ListDto<FavoriteLinkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorite_planets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    list_links(&state, FavoriteKind::Planet).await
}

async fn list_links(
    state: &AppState,
    kind: FavoriteKind,
) -> Result<(StatusCode, Json<ListDto<FavoriteLinkDto>>), Error> {
    let links = FavoriteService::new(&state.db).get_links(kind).await?;

    Ok((StatusCode::OK, Json(ListDto::from(links))))
}
