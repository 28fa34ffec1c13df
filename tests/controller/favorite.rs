//! Tests for the favorites endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::favorite::{AddFavoriteCharacterDto, AddFavoritePlanetDto, AddFavoriteVehicleDto},
    server::{
        controller::{
            favorite::{
                add_favorite_character, add_favorite_planet, add_favorite_vehicle,
                get_user_favorites, remove_favorite_character,
            },
            util::json::DeferredJsonBody,
        },
        model::app::AppState,
    },
};
use serde_json::json;

use super::*;

/// Expect 201 with the target name and the ID of the new link
#[tokio::test]
async fn adds_favorite_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let tatooine = test.catalog().insert_planet("Tatooine").await?;

    let resp = add_favorite_planet(
        State(test.to_app_state::<AppState>()),
        Path(user.id),
        DeferredJsonBody::from(AddFavoritePlanetDto {
            planet_id: Some(tatooine.id),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "Planet Tatooine added to favorites");
    assert!(body["favorite_id"].is_i64());

    Ok(())
}

/// Expect 400 when the target ID is missing from the body
#[tokio::test]
async fn rejects_missing_character_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = add_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path(1),
        DeferredJsonBody::from(AddFavoriteCharacterDto::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "character_id is required"})
    );

    Ok(())
}

/// Expect 404 and no link row for a vehicle that does not exist
#[tokio::test]
async fn rejects_unknown_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user("luke@rebellion.org")
        .build()
        .await?;

    let resp = add_favorite_vehicle(
        State(test.to_app_state::<AppState>()),
        Path(1),
        DeferredJsonBody::from(AddFavoriteVehicleDto {
            vehicle_id: Some(99),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Vehicle with ID 99 does not exist"})
    );

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()), Path(1))
        .await
        .into_response();
    assert_eq!(body_json(resp).await["favorite_vehicles"], json!([]));

    Ok(())
}

/// Expect 404 for the favorites of a user that does not exist
#[tokio::test]
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()), Path(3))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 and the link kept when removing a link owned by another user
#[tokio::test]
async fn refuses_to_remove_link_of_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.user().insert_user("luke@rebellion.org").await?;
    let han = test.user().insert_user("han@falcon.net").await?;
    let leia = test.catalog().insert_character("Leia").await?;
    let link = test
        .favorite()
        .insert_favorite_character(han.id, leia.id)
        .await?;

    let resp = remove_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((luke.id, link.id)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": format!("You don't have a favorite character with ID {}", link.id)})
    );

    let resp = get_user_favorites(State(test.to_app_state::<AppState>()), Path(han.id))
        .await
        .into_response();
    assert_eq!(
        body_json(resp).await["favorite_characters"]
            .as_array()
            .unwrap()
            .len(),
        1
    );

    Ok(())
}

/// Expect 200 when removing an owned link
#[tokio::test]
async fn removes_own_link() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let luke = test.user().insert_user("luke@rebellion.org").await?;
    let leia = test.catalog().insert_character("Leia").await?;
    let link = test
        .favorite()
        .insert_favorite_character(luke.id, leia.id)
        .await?;

    let resp = remove_favorite_character(
        State(test.to_app_state::<AppState>()),
        Path((luke.id, link.id)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Character removed from favorites"})
    );

    Ok(())
}
