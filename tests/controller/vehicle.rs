//! Tests for the vehicle endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto},
    server::{
        controller::{
            util::json::{DeferredJsonBody, JsonBody},
            vehicle::{create_vehicle, get_all_vehicles, get_vehicle, update_vehicle},
        },
        model::app::AppState,
    },
};
use serde_json::json;

use super::*;

/// Expect 400 rather than 404 for an unknown vehicle
#[tokio::test]
async fn returns_bad_request_for_unknown_vehicle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_vehicle(State(test.to_app_state::<AppState>()), Path(7))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Vehicle with ID 7 does not exist"})
    );

    Ok(())
}

/// Expect the vehicle representation to omit its ID
#[tokio::test]
async fn serializes_vehicle_without_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("X-wing")
        .build()
        .await?;

    let resp = get_all_vehicles(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({"data": [{"name": "X-wing", "max_speed": null, "driver_id": null}]})
    );

    Ok(())
}

/// Expect 409 when the driver already drives another vehicle
#[tokio::test]
async fn rejects_assigned_driver() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let han = test.catalog().insert_character("Han").await?;
    test.catalog()
        .insert_vehicle("Millennium Falcon", Some(han.id))
        .await?;

    let resp = create_vehicle(
        State(test.to_app_state::<AppState>()),
        JsonBody(CreateVehicleDto {
            name: Some("Speeder".to_string()),
            max_speed: None,
            driver_id: Some(han.id),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when assigning a driver that does not exist
#[tokio::test]
async fn rejects_unknown_driver_on_update() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_vehicle("X-wing")
        .build()
        .await?;

    let resp = update_vehicle(
        State(test.to_app_state::<AppState>()),
        Path(1),
        DeferredJsonBody::from(UpdateVehicleDto {
            driver_id: Some(Some(9)),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({"msg": "Character with ID 9 does not exist"})
    );

    Ok(())
}
