//! Tests for the people endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::{
        controller::{
            character::{create_character, delete_character, get_character, update_character},
            util::json::{DeferredJsonBody, JsonBody},
        },
        model::app::AppState,
    },
};
use serde_json::json;

use super::*;

/// Expect a created character to be returned unchanged by a subsequent get
#[tokio::test]
async fn creates_and_gets_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_character(
        State(test.to_app_state::<AppState>()),
        JsonBody(CreateCharacterDto {
            first_name: Some("Luke".to_string()),
            specie: Some("Human".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_i64().unwrap() as i32;

    let resp = get_character(State(test.to_app_state::<AppState>()), Path(id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched["first_name"], "Luke");
    assert_eq!(fetched["specie"], "Human");
    assert_eq!(fetched, created);

    Ok(())
}

/// Expect 400 naming the missing field
#[tokio::test]
async fn rejects_character_without_first_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = create_character(
        State(test.to_app_state::<AppState>()),
        JsonBody(CreateCharacterDto {
            specie: Some("Human".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "first_name is required"})
    );

    Ok(())
}

/// Expect 404 when updating a character that does not exist
#[tokio::test]
async fn returns_not_found_when_updating_unknown_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = update_character(
        State(test.to_app_state::<AppState>()),
        Path(1),
        DeferredJsonBody::from(UpdateCharacterDto::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 and the character to be gone afterwards
#[tokio::test]
async fn deletes_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_character("Luke")
        .build()
        .await?;

    let resp = delete_character(State(test.to_app_state::<AppState>()), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_character(State(test.to_app_state::<AppState>()), Path(1))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
