//! Tests for the admin listing of favorite links.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::{
    controller::admin::{list_favorite_planets, list_favorite_vehicles},
    model::app::AppState,
};
use serde_json::json;

use super::*;

/// Expect every link row with its raw IDs
#[tokio::test]
async fn lists_favorite_planet_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.user().insert_user("luke@rebellion.org").await?;
    let hoth = test.catalog().insert_planet("Hoth").await?;
    let link = test
        .favorite()
        .insert_favorite_planet(user.id, hoth.id)
        .await?;

    let resp = list_favorite_planets(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"data": [{"id": link.id, "user_id": user.id, "target_id": hoth.id}]})
    );

    Ok(())
}

/// Expect an empty list without links
#[tokio::test]
async fn lists_no_vehicle_links() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = list_favorite_vehicles(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"data": []}));

    Ok(())
}
