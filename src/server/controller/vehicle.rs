use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ListDto, MessageDto},
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    server::{
        controller::util::json::{DeferredJsonBody, JsonBody},
        error::{request::RequestError, resource::ResourceError, Error},
        model::app::AppState,
        service::vehicle::VehicleService,
    },
};

pub static VEHICLE_TAG: &str = "vehicles";

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "Success when retrieving vehicles", body = ListDto<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = VehicleService::new(&state.db).get_all_vehicles().await?;

    Ok((StatusCode::OK, Json(ListDto::from(vehicles))))
}

/// Get a vehicle by ID
///
/// An unknown vehicle ID responds with 400 rather than 404, existing clients depend on it.
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Success when retrieving vehicle", body = VehicleDto),
        (status = 400, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(vehicle) = VehicleService::new(&state.db)
        .get_vehicle(vehicle_id)
        .await?
    else {
        return Err(RequestError::UnknownVehicle(vehicle_id).into());
    };

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Create a vehicle, `name` is required
///
/// # Responses
/// - 201 (Created): The created vehicle
/// - 400 (Bad Request): Missing body or `name`
/// - 404 (Not Found): The driver does not exist
/// - 409 (Conflict): The name is in use or the driver already drives another vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Missing body or name", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 409, description = "Name in use or driver already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    JsonBody(vehicle): JsonBody<CreateVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db)
        .create_vehicle(vehicle)
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 400, description = "Missing body", body = ErrorDto),
        (status = 404, description = "Vehicle or driver not found", body = ErrorDto),
        (status = 409, description = "Name in use or driver already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
    body: DeferredJsonBody<UpdateVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_service = VehicleService::new(&state.db);

    if vehicle_service.get_vehicle(vehicle_id).await?.is_none() {
        return Err(ResourceError::VehicleNotFound(vehicle_id).into());
    }

    let vehicle = vehicle_service
        .update_vehicle(vehicle_id, body.into_inner()?)
        .await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "ID of the vehicle")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    VehicleService::new(&state.db)
        .delete_vehicle(vehicle_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Vehicle deleted"))))
}
