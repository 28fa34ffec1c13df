//! Tests for the user endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        controller::{
            user::{create_user, delete_user, get_all_users, get_user, update_user},
            util::json::{DeferredJsonBody, JsonBody},
        },
        model::app::AppState,
    },
};
use serde_json::json;

use super::*;

/// Expect 201 with the created user and no password or hash in the body
#[tokio::test]
async fn creates_user_without_exposing_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        JsonBody(CreateUserDto {
            email: Some("luke@rebellion.org".to_string()),
            password: Some("usetheforce".to_string()),
            user_name: Some("luke".to_string()),
            is_active: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["email"], "luke@rebellion.org");
    assert_eq!(body["user_name"], "luke");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert!(!body.to_string().contains("usetheforce"));

    Ok(())
}

/// Expect 400 and no persisted user when the password is missing
#[tokio::test]
async fn rejects_user_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_user(
        State(test.to_app_state::<AppState>()),
        JsonBody(CreateUserDto {
            email: Some("luke@rebellion.org".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"msg": "password is required"}));

    let resp = get_all_users(State(test.to_app_state::<AppState>()))
        .await
        .into_response();
    assert_eq!(body_json(resp).await, json!({"data": []}));

    Ok(())
}

/// Expect 409 when the email is already in use
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = create_user(
        State(test.to_app_state::<AppState>()),
        JsonBody(CreateUserDto {
            email: Some("luke@rebellion.org".to_string()),
            password: Some("usetheforce".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 with a message naming the missing user
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_user(State(test.to_app_state::<AppState>()), Path(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "User with ID 42 does not exist"})
    );

    Ok(())
}

/// Expect only the provided keys to be updated
#[tokio::test]
async fn updates_present_keys_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;

    let resp = update_user(
        State(test.to_app_state::<AppState>()),
        Path(user.id),
        DeferredJsonBody::from(UpdateUserDto {
            is_active: Some(false),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["is_active"], false);
    assert_eq!(body["email"], "luke@rebellion.org");

    Ok(())
}

/// Expect 200 on the first delete and 404 on the second
#[tokio::test]
async fn deletes_user_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;

    let resp = delete_user(State(test.to_app_state::<AppState>()), Path(user.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"msg": "User deleted"}));

    let resp = delete_user(State(test.to_app_state::<AppState>()), Path(user.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
