//! Vehicle endpoints: entry registration, exit recording, reads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{CreateVehicleRequest, RecordExitRequest, VehicleDto, VehicleListResponse};
use crate::app_state::AppState;
use crate::domain::VehicleId;
use crate::error::{ErrorResponse, GatewayError};
use crate::service::NewVehicle;

/// `POST /vehicles` — Register a vehicle entry.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidVehicleType`] for an unrecognized type.
#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    summary = "Register a vehicle entry",
    description = "Creates a parking session for the vehicle and best-effort assigns it to the first free slot. Supplying an exit_time bills the session immediately and skips slot assignment.",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle registered", body = VehicleDto),
        (status = 400, description = "Invalid vehicle type", body = ErrorResponse),
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(req): Json<CreateVehicleRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let vehicle = state
        .vehicle_service
        .register_entry(NewVehicle {
            vehicle_id: VehicleId::new(req.vehicle_id),
            vehicle_type: req.vehicle_type,
            entry_time: req.entry_time,
            exit_time: req.exit_time,
            predicted_number_plate: req.predicted_number_plate,
            actual_number_plate: req.actual_number_plate,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(VehicleDto::from(vehicle))))
}

/// `PUT /vehicles/{id}/exit` — Record a vehicle exit.
///
/// # Errors
///
/// Returns [`GatewayError::VehicleNotFound`] if the vehicle does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/vehicles/{id}/exit",
    tag = "Vehicles",
    summary = "Record a vehicle exit",
    description = "Sets the exit time, computes the final parking fee, and frees any slot holding the vehicle.",
    params(
        ("id" = i64, Path, description = "Vehicle ID"),
    ),
    request_body = RecordExitRequest,
    responses(
        (status = 200, description = "Exit recorded", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
    )
)]
pub async fn record_exit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RecordExitRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let vehicle = state
        .vehicle_service
        .record_exit(VehicleId::new(id), req.exit_time)
        .await?;

    Ok(Json(VehicleDto::from(vehicle)))
}

/// `GET /vehicles` — List all vehicle records.
///
/// # Errors
///
/// Returns a [`GatewayError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    summary = "List vehicles",
    description = "Returns every vehicle record in insertion order.",
    responses(
        (status = 200, description = "Vehicle list", body = VehicleListResponse),
    )
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let vehicles = state.vehicle_service.list_vehicles().await?;
    let data = vehicles.into_iter().map(VehicleDto::from).collect();
    Ok(Json(VehicleListResponse { data }))
}

/// `GET /vehicles/{id}` — Get a single vehicle record.
///
/// # Errors
///
/// Returns [`GatewayError::VehicleNotFound`] if the vehicle does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    summary = "Get vehicle details",
    params(
        ("id" = i64, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle record", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
    )
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, GatewayError> {
    let vehicle = state.vehicle_service.get_vehicle(VehicleId::new(id)).await?;
    Ok(Json(VehicleDto::from(vehicle)))
}

/// Vehicle routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", post(create_vehicle).get(list_vehicles))
        .route("/vehicles/{id}", get(get_vehicle))
        .route("/vehicles/{id}/exit", put(record_exit))
}
