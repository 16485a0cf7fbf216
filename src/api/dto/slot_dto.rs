//! Parking-slot DTOs for create, assign, and list operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ParkingSlot, SlotId, VehicleId};

/// Request body for `POST /parking-slots`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSlotRequest {
    /// Externally supplied unique identifier.
    pub slot_id: i64,
    /// Free-text slot classification.
    pub slot_type: String,
}

/// Parking slot record as returned by all slot endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotDto {
    /// Unique identifier.
    pub slot_id: SlotId,
    /// Free-text slot classification.
    pub slot_type: String,
    /// Currently parked vehicle; `null` means the slot is free.
    pub vehicle_id: Option<VehicleId>,
}

impl From<ParkingSlot> for SlotDto {
    fn from(slot: ParkingSlot) -> Self {
        Self {
            slot_id: slot.slot_id,
            slot_type: slot.slot_type,
            vehicle_id: slot.vehicle_id,
        }
    }
}

/// List response for `GET /parking-slots`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SlotListResponse {
    /// Slot records in insertion order.
    pub data: Vec<SlotDto>,
}

/// Confirmation message for the park-vehicle endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}
