//! Vehicle registry service: entry registration and exit recording.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::SlotService;
use crate::domain::{Vehicle, VehicleId, VehicleType, fee};
use crate::error::GatewayError;
use crate::persistence::LotStore;

/// Input for registering a vehicle entry.
///
/// `vehicle_type` arrives as the raw wire string and is normalized here;
/// an `exit_time` at creation is supported but atypical (the session is
/// then billed immediately and no slot is assigned).
#[derive(Debug, Clone)]
pub struct NewVehicle {
    /// Externally supplied unique identifier.
    pub vehicle_id: VehicleId,
    /// Raw vehicle-type string, parsed case-insensitively.
    pub vehicle_type: String,
    /// Entry timestamp.
    pub entry_time: DateTime<Utc>,
    /// Optional exit timestamp supplied at creation.
    pub exit_time: Option<DateTime<Utc>>,
    /// Number plate as read by the recognition system.
    pub predicted_number_plate: Option<String>,
    /// Number plate as confirmed by an operator.
    pub actual_number_plate: Option<String>,
}

/// Orchestration layer for vehicle session operations.
///
/// Owns the [`LotStore`] for vehicle records and delegates slot
/// assignment and release to [`SlotService`]. The two steps of each
/// operation (vehicle write, then slot write) are separate store
/// round-trips, not a single transaction.
#[derive(Debug, Clone)]
pub struct VehicleService {
    store: Arc<dyn LotStore>,
    slots: Arc<SlotService>,
}

impl VehicleService {
    /// Creates a new `VehicleService`.
    #[must_use]
    pub fn new(store: Arc<dyn LotStore>, slots: Arc<SlotService>) -> Self {
        Self { store, slots }
    }

    /// Registers a vehicle entry and best-effort parks it in the first
    /// free slot.
    ///
    /// The fee is zero unless an exit time was supplied at creation.
    /// Absence of a free slot is not an error; the vehicle simply stays
    /// unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidVehicleType`] for an unrecognized
    /// type string, or a persistence error from the store.
    pub async fn register_entry(&self, new: NewVehicle) -> Result<Vehicle, GatewayError> {
        let vehicle_type = VehicleType::parse(&new.vehicle_type)?;
        let parking_fees = fee::parking_fee(new.entry_time, new.exit_time, vehicle_type);

        let vehicle = self
            .store
            .insert_vehicle(Vehicle {
                vehicle_id: new.vehicle_id,
                vehicle_type,
                entry_time: new.entry_time,
                exit_time: new.exit_time,
                predicted_number_plate: new.predicted_number_plate,
                actual_number_plate: new.actual_number_plate,
                parking_fees,
            })
            .await?;

        tracing::info!(
            vehicle_id = %vehicle.vehicle_id,
            vehicle_type = %vehicle.vehicle_type,
            "vehicle registered"
        );

        if vehicle.is_parked() {
            match self.slots.find_free_slot().await? {
                Some(slot) => {
                    self.slots.assign(slot.slot_id, vehicle.vehicle_id).await?;
                }
                None => {
                    tracing::debug!(
                        vehicle_id = %vehicle.vehicle_id,
                        "no free slot available, vehicle left unassigned"
                    );
                }
            }
        }

        Ok(vehicle)
    }

    /// Records a vehicle exit: sets the exit time, computes the final fee,
    /// and releases any slot holding the vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::VehicleNotFound`] if the vehicle does not
    /// exist, or a persistence error from the store.
    pub async fn record_exit(
        &self,
        vehicle_id: VehicleId,
        exit_time: DateTime<Utc>,
    ) -> Result<Vehicle, GatewayError> {
        let mut vehicle = self
            .store
            .get_vehicle(vehicle_id)
            .await?
            .ok_or(GatewayError::VehicleNotFound(vehicle_id))?;

        if vehicle.exit_time.is_some() {
            tracing::warn!(%vehicle_id, "re-recording exit for already exited vehicle");
        }

        vehicle.exit_time = Some(exit_time);
        vehicle.parking_fees =
            fee::parking_fee(vehicle.entry_time, vehicle.exit_time, vehicle.vehicle_type);
        self.store.update_vehicle(&vehicle).await?;

        tracing::info!(
            %vehicle_id,
            parking_fees = vehicle.parking_fees,
            "vehicle exit recorded"
        );

        self.slots.release_vehicle(vehicle_id).await?;

        Ok(vehicle)
    }

    /// Fetches a single vehicle record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::VehicleNotFound`] if the vehicle does not
    /// exist.
    pub async fn get_vehicle(&self, vehicle_id: VehicleId) -> Result<Vehicle, GatewayError> {
        self.store
            .get_vehicle(vehicle_id)
            .await?
            .ok_or(GatewayError::VehicleNotFound(vehicle_id))
    }

    /// Returns all vehicle records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] on storage failure.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError> {
        self.store.list_vehicles().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    use crate::domain::SlotId;
    use crate::persistence::MemoryStore;

    fn entry_time() -> DateTime<Utc> {
        let Some(t) = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).single() else {
            panic!("valid timestamp");
        };
        t
    }

    fn make_services() -> (VehicleService, Arc<SlotService>) {
        let store: Arc<dyn LotStore> = Arc::new(MemoryStore::new());
        let slots = Arc::new(SlotService::new(Arc::clone(&store)));
        (
            VehicleService::new(store, Arc::clone(&slots)),
            slots,
        )
    }

    fn new_vehicle(id: i64, vehicle_type: &str) -> NewVehicle {
        NewVehicle {
            vehicle_id: VehicleId::new(id),
            vehicle_type: vehicle_type.to_string(),
            entry_time: entry_time(),
            exit_time: None,
            predicted_number_plate: Some("KA-01-AB-1234".to_string()),
            actual_number_plate: None,
        }
    }

    #[tokio::test]
    async fn register_entry_starts_with_zero_fee() {
        let (vehicles, _) = make_services();
        let result = vehicles.register_entry(new_vehicle(1, "2 wheeler")).await;
        assert!(matches!(result, Ok(v) if v.parking_fees == 0 && v.is_parked()));
    }

    #[tokio::test]
    async fn register_entry_rejects_unknown_type() {
        let (vehicles, _) = make_services();
        let result = vehicles.register_entry(new_vehicle(1, "3 wheeler")).await;
        assert!(matches!(result, Err(GatewayError::InvalidVehicleType(_))));
    }

    #[tokio::test]
    async fn register_entry_auto_assigns_free_slot() {
        let (vehicles, slots) = make_services();
        let _ = slots.create_slot(SlotId::new(1), "standard".to_string()).await;

        let result = vehicles.register_entry(new_vehicle(7, "4 wheeler")).await;
        assert!(result.is_ok());

        let stored = slots.list_slots().await.unwrap_or_default();
        let slot = stored.iter().find(|s| s.slot_id == SlotId::new(1));
        assert!(matches!(slot, Some(s) if s.vehicle_id == Some(VehicleId::new(7))));
    }

    #[tokio::test]
    async fn register_entry_without_free_slot_succeeds() {
        let (vehicles, _) = make_services();
        let result = vehicles.register_entry(new_vehicle(7, "4 wheeler")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn register_entry_with_exit_time_bills_immediately() {
        let (vehicles, slots) = make_services();
        let _ = slots.create_slot(SlotId::new(1), "standard".to_string()).await;

        let mut new = new_vehicle(3, "2 wheeler");
        new.exit_time = Some(entry_time() + Duration::minutes(90));
        let result = vehicles.register_entry(new).await;
        assert!(matches!(result, Ok(v) if v.parking_fees == 40));

        // Already-exited sessions must not take a slot.
        let free = slots.find_free_slot().await;
        assert!(matches!(free, Ok(Some(_))));
    }

    #[tokio::test]
    async fn record_exit_computes_fee_and_releases_slot() {
        let (vehicles, slots) = make_services();
        let _ = slots.create_slot(SlotId::new(1), "standard".to_string()).await;
        let _ = vehicles.register_entry(new_vehicle(7, "4 wheeler")).await;

        let exit = entry_time() + Duration::minutes(61);
        let result = vehicles.record_exit(VehicleId::new(7), exit).await;
        assert!(matches!(result, Ok(v) if v.parking_fees == 80 && !v.is_parked()));

        let stored = slots.list_slots().await.unwrap_or_default();
        let slot = stored.iter().find(|s| s.slot_id == SlotId::new(1));
        assert!(matches!(slot, Some(s) if s.is_free()));
    }

    #[tokio::test]
    async fn record_exit_unknown_vehicle_is_not_found() {
        let (vehicles, _) = make_services();
        let result = vehicles
            .record_exit(VehicleId::new(99), entry_time())
            .await;
        assert!(matches!(result, Err(GatewayError::VehicleNotFound(_))));
    }

    #[tokio::test]
    async fn record_exit_without_held_slot_still_succeeds() {
        let (vehicles, _) = make_services();
        let _ = vehicles.register_entry(new_vehicle(7, "2 wheeler")).await;

        let exit = entry_time() + Duration::minutes(30);
        let result = vehicles.record_exit(VehicleId::new(7), exit).await;
        assert!(matches!(result, Ok(v) if v.parking_fees == 20));
    }

    #[tokio::test]
    async fn list_vehicles_preserves_insertion_order() {
        let (vehicles, _) = make_services();
        let _ = vehicles.register_entry(new_vehicle(2, "2 wheeler")).await;
        let _ = vehicles.register_entry(new_vehicle(1, "4 wheeler")).await;

        let listed = vehicles.list_vehicles().await.unwrap_or_default();
        let ids: Vec<i64> = listed.iter().map(|v| v.vehicle_id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
