use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::json::{DeferredJsonBody, JsonBody},
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = ListDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_all_users().await?;

    Ok((StatusCode::OK, Json(ListDto::from(users))))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when retrieving user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        return Err(ResourceError::UserNotFound(user_id).into());
    };

    Ok((StatusCode::OK, Json(user)))
}

/// Create a user
///
/// The password is stored as an argon2 hash and never returned.
///
/// # Responses
/// - 201 (Created): The created user
/// - 400 (Bad Request): Missing body, `email` or `password`
/// - 409 (Conflict): The email is already in use
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing body or required field", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db).create_user(user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Partially update a user, only keys present in the body are written
///
/// The user is looked up before the body is read, an unknown user responds with 404 even
/// when the body is missing.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Missing body", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    body: DeferredJsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    if user_service.get_user(user_id).await?.is_none() {
        return Err(ResourceError::UserNotFound(user_id).into());
    }

    let user = user_service
        .update_user(user_id, body.into_inner()?)
        .await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user
///
/// Favorite vehicles of the user are deleted, favorite characters & planets are kept
/// without an owning user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).delete_user(user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
