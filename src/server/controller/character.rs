use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListDto, MessageDto},
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::util::json::{DeferredJsonBody, JsonBody},
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "people";

#[utoipa::path(
    get,
    path = "/people",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = ListDto<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db)
        .get_all_characters()
        .await?;

    Ok((StatusCode::OK, Json(ListDto::from(characters))))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Success when retrieving character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(character) = CharacterService::new(&state.db)
        .get_character(character_id)
        .await?
    else {
        return Err(ResourceError::CharacterNotFound(character_id).into());
    };

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character, `first_name` & `specie` are required
#[utoipa::path(
    post,
    path = "/people",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Missing body or required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    JsonBody(character): JsonBody<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db)
        .create_character(character)
        .await?;

    Ok((StatusCode::CREATED, Json(character)))
}

#[utoipa::path(
    put,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Character updated", body = CharacterDto),
        (status = 400, description = "Missing body", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
    body: DeferredJsonBody<UpdateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    if character_service.get_character(character_id).await?.is_none() {
        return Err(ResourceError::CharacterNotFound(character_id).into());
    }

    let character = character_service
        .update_character(character_id, body.into_inner()?)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character along with its favorite links, its vehicle is kept without a driver
#[utoipa::path(
    delete,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "ID of the character")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CharacterService::new(&state.db)
        .delete_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Character deleted"))))
}
