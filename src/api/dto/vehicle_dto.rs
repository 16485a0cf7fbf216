//! Vehicle-related DTOs for entry, exit, and read operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Vehicle, VehicleId};

/// Request body for `POST /vehicles`.
///
/// `vehicle_type` is a free-form string here; normalization to the closed
/// enum happens in the service. Timestamps accept any RFC-3339 offset and
/// are normalized to UTC during deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVehicleRequest {
    /// Externally supplied unique identifier.
    pub vehicle_id: i64,
    /// Vehicle type string (`"2 wheeler"` or `"4 wheeler"`, case-insensitive).
    pub vehicle_type: String,
    /// Entry timestamp.
    pub entry_time: DateTime<Utc>,
    /// Optional exit timestamp; when present the session is billed at creation.
    #[serde(default)]
    pub exit_time: Option<DateTime<Utc>>,
    /// Number plate as read by the recognition system.
    #[serde(default)]
    pub predicted_number_plate: Option<String>,
    /// Number plate as confirmed by an operator.
    #[serde(default)]
    pub actual_number_plate: Option<String>,
}

/// Request body for `PUT /vehicles/{id}/exit`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordExitRequest {
    /// Exit timestamp.
    pub exit_time: DateTime<Utc>,
}

/// Vehicle record as returned by all vehicle endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleDto {
    /// Unique identifier.
    pub vehicle_id: VehicleId,
    /// Canonical vehicle type string.
    pub vehicle_type: String,
    /// Entry timestamp (UTC).
    pub entry_time: DateTime<Utc>,
    /// Exit timestamp; `null` while still parked.
    pub exit_time: Option<DateTime<Utc>>,
    /// Number plate as read by the recognition system.
    pub predicted_number_plate: Option<String>,
    /// Number plate as confirmed by an operator.
    pub actual_number_plate: Option<String>,
    /// Total fee; zero until the exit is recorded.
    pub parking_fees: i64,
}

impl From<Vehicle> for VehicleDto {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.vehicle_id,
            vehicle_type: vehicle.vehicle_type.as_str().to_string(),
            entry_time: vehicle.entry_time,
            exit_time: vehicle.exit_time,
            predicted_number_plate: vehicle.predicted_number_plate,
            actual_number_plate: vehicle.actual_number_plate,
            parking_fees: vehicle.parking_fees,
        }
    }
}

/// List response for `GET /vehicles`.
#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleListResponse {
    /// Vehicle records in insertion order.
    pub data: Vec<VehicleDto>,
}
