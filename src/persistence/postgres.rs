//! PostgreSQL implementation of [`LotStore`] using `sqlx::PgPool`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::LotStore;
use crate::domain::{ParkingSlot, SlotId, Vehicle, VehicleId, VehicleType};
use crate::error::GatewayError;

type VehicleRow = (
    i64,
    String,
    DateTime<Utc>,
    Option<DateTime<Utc>>,
    Option<String>,
    Option<String>,
    i64,
);

type SlotRow = (i64, String, Option<i64>);

/// PostgreSQL-backed [`LotStore`].
///
/// Insertion order for `first_free_slot` and list queries comes from the
/// `created_at` column on each table.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn vehicle_from_row(row: VehicleRow) -> Result<Vehicle, GatewayError> {
        let (id, vehicle_type, entry_time, exit_time, predicted, actual, fees) = row;
        let vehicle_type = VehicleType::parse(&vehicle_type).map_err(|_| {
            GatewayError::PersistenceError(format!(
                "unrecognized vehicle_type in storage: {vehicle_type}"
            ))
        })?;
        Ok(Vehicle {
            vehicle_id: VehicleId::new(id),
            vehicle_type,
            entry_time,
            exit_time,
            predicted_number_plate: predicted,
            actual_number_plate: actual,
            parking_fees: fees,
        })
    }

    fn slot_from_row(row: SlotRow) -> ParkingSlot {
        let (id, slot_type, vehicle_id) = row;
        ParkingSlot {
            slot_id: SlotId::new(id),
            slot_type,
            vehicle_id: vehicle_id.map(VehicleId::new),
        }
    }
}

#[async_trait]
impl LotStore for PostgresStore {
    async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, GatewayError> {
        sqlx::query(
            "INSERT INTO vehicles \
             (vehicle_id, vehicle_type, entry_time, exit_time, \
              predicted_number_plate, actual_number_plate, parking_fees) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(vehicle.vehicle_id.get())
        .bind(vehicle.vehicle_type.as_str())
        .bind(vehicle.entry_time)
        .bind(vehicle.exit_time)
        .bind(&vehicle.predicted_number_plate)
        .bind(&vehicle.actual_number_plate)
        .bind(vehicle.parking_fees)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(vehicle)
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Option<Vehicle>, GatewayError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT vehicle_id, vehicle_type, entry_time, exit_time, \
             predicted_number_plate, actual_number_plate, parking_fees \
             FROM vehicles WHERE vehicle_id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        row.map(Self::vehicle_from_row).transpose()
    }

    async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<(), GatewayError> {
        sqlx::query(
            "UPDATE vehicles SET vehicle_type = $2, entry_time = $3, exit_time = $4, \
             predicted_number_plate = $5, actual_number_plate = $6, parking_fees = $7 \
             WHERE vehicle_id = $1",
        )
        .bind(vehicle.vehicle_id.get())
        .bind(vehicle.vehicle_type.as_str())
        .bind(vehicle.entry_time)
        .bind(vehicle.exit_time)
        .bind(&vehicle.predicted_number_plate)
        .bind(&vehicle.actual_number_plate)
        .bind(vehicle.parking_fees)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT vehicle_id, vehicle_type, entry_time, exit_time, \
             predicted_number_plate, actual_number_plate, parking_fees \
             FROM vehicles ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        rows.into_iter().map(Self::vehicle_from_row).collect()
    }

    async fn insert_slot(&self, slot: ParkingSlot) -> Result<ParkingSlot, GatewayError> {
        sqlx::query(
            "INSERT INTO parking_slots (slot_id, slot_type, vehicle_id) VALUES ($1, $2, $3)",
        )
        .bind(slot.slot_id.get())
        .bind(&slot.slot_type)
        .bind(slot.vehicle_id.map(|v| v.get()))
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(slot)
    }

    async fn get_slot(&self, id: SlotId) -> Result<Option<ParkingSlot>, GatewayError> {
        let row = sqlx::query_as::<_, SlotRow>(
            "SELECT slot_id, slot_type, vehicle_id FROM parking_slots WHERE slot_id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(row.map(Self::slot_from_row))
    }

    async fn update_slot(&self, slot: &ParkingSlot) -> Result<(), GatewayError> {
        sqlx::query("UPDATE parking_slots SET slot_type = $2, vehicle_id = $3 WHERE slot_id = $1")
            .bind(slot.slot_id.get())
            .bind(&slot.slot_type)
            .bind(slot.vehicle_id.map(|v| v.get()))
            .execute(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(())
    }

    async fn list_slots(&self) -> Result<Vec<ParkingSlot>, GatewayError> {
        let rows = sqlx::query_as::<_, SlotRow>(
            "SELECT slot_id, slot_type, vehicle_id FROM parking_slots ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::slot_from_row).collect())
    }

    async fn first_free_slot(&self) -> Result<Option<ParkingSlot>, GatewayError> {
        let row = sqlx::query_as::<_, SlotRow>(
            "SELECT slot_id, slot_type, vehicle_id FROM parking_slots \
             WHERE vehicle_id IS NULL ORDER BY created_at ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(row.map(Self::slot_from_row))
    }

    async fn slots_holding(&self, vehicle_id: VehicleId) -> Result<Vec<ParkingSlot>, GatewayError> {
        let rows = sqlx::query_as::<_, SlotRow>(
            "SELECT slot_id, slot_type, vehicle_id FROM parking_slots \
             WHERE vehicle_id = $1 ORDER BY created_at ASC",
        )
        .bind(vehicle_id.get())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::slot_from_row).collect())
    }
}
