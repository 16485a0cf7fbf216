//! Parking-slot endpoints: create, assign, list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::{CreateSlotRequest, MessageResponse, SlotDto, SlotListResponse};
use crate::app_state::AppState;
use crate::domain::{SlotId, VehicleId};
use crate::error::{ErrorResponse, GatewayError};

/// `POST /parking-slots` — Create a parking slot.
///
/// # Errors
///
/// Returns a [`GatewayError`] on persistence failures.
#[utoipa::path(
    post,
    path = "/api/v1/parking-slots",
    tag = "Parking Slots",
    summary = "Create a parking slot",
    description = "Creates an empty slot. Slot IDs are externally supplied; uniqueness is enforced by the store.",
    request_body = CreateSlotRequest,
    responses(
        (status = 201, description = "Slot created", body = SlotDto),
    )
)]
pub async fn create_slot(
    State(state): State<AppState>,
    Json(req): Json<CreateSlotRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let slot = state
        .slot_service
        .create_slot(SlotId::new(req.slot_id), req.slot_type)
        .await?;

    Ok((StatusCode::CREATED, Json(SlotDto::from(slot))))
}

/// `PUT /parking-slots/{slot_id}/park-vehicle/{vehicle_id}` — Park a vehicle.
///
/// # Errors
///
/// Returns [`GatewayError::SlotNotFound`] if the slot does not exist.
#[utoipa::path(
    put,
    path = "/api/v1/parking-slots/{slot_id}/park-vehicle/{vehicle_id}",
    tag = "Parking Slots",
    summary = "Park a vehicle in a slot",
    description = "Marks the slot as occupied by the vehicle, overwriting any previous occupant.",
    params(
        ("slot_id" = i64, Path, description = "Slot ID"),
        ("vehicle_id" = i64, Path, description = "Vehicle ID"),
    ),
    responses(
        (status = 200, description = "Vehicle parked", body = MessageResponse),
        (status = 404, description = "Slot not found", body = ErrorResponse),
    )
)]
pub async fn park_vehicle(
    State(state): State<AppState>,
    Path((slot_id, vehicle_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, GatewayError> {
    let slot = state
        .slot_service
        .assign(SlotId::new(slot_id), VehicleId::new(vehicle_id))
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Vehicle {vehicle_id} parked in slot {}", slot.slot_id),
    }))
}

/// `GET /parking-slots` — List all slots.
///
/// # Errors
///
/// Returns a [`GatewayError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/v1/parking-slots",
    tag = "Parking Slots",
    summary = "List parking slots",
    description = "Returns every slot in insertion order with its current occupant.",
    responses(
        (status = 200, description = "Slot list", body = SlotListResponse),
    )
)]
pub async fn list_slots(State(state): State<AppState>) -> Result<impl IntoResponse, GatewayError> {
    let slots = state.slot_service.list_slots().await?;
    let data = slots.into_iter().map(SlotDto::from).collect();
    Ok(Json(SlotListResponse { data }))
}

/// Parking-slot routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/parking-slots", post(create_slot).get(list_slots))
        .route(
            "/parking-slots/{slot_id}/park-vehicle/{vehicle_id}",
            put(park_vehicle),
        )
}
