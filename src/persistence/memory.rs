//! In-memory implementation of [`LotStore`].
//!
//! Backed by `tokio::sync::RwLock` around plain maps, with an explicit
//! slot insertion order so `first_free_slot` is deterministic. Used by the
//! service tests and when persistence is disabled via configuration.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::LotStore;
use crate::domain::{ParkingSlot, SlotId, Vehicle, VehicleId};
use crate::error::GatewayError;

#[derive(Debug, Default)]
struct Inner {
    vehicles: HashMap<VehicleId, Vehicle>,
    vehicle_order: Vec<VehicleId>,
    slots: HashMap<SlotId, ParkingSlot>,
    slot_order: Vec<SlotId>,
}

/// In-memory [`LotStore`] with insertion-ordered iteration.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LotStore for MemoryStore {
    async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, GatewayError> {
        let mut inner = self.inner.write().await;
        if !inner.vehicles.contains_key(&vehicle.vehicle_id) {
            inner.vehicle_order.push(vehicle.vehicle_id);
        }
        inner.vehicles.insert(vehicle.vehicle_id, vehicle.clone());
        Ok(vehicle)
    }

    async fn get_vehicle(&self, id: VehicleId) -> Result<Option<Vehicle>, GatewayError> {
        let inner = self.inner.read().await;
        Ok(inner.vehicles.get(&id).cloned())
    }

    async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<(), GatewayError> {
        let mut inner = self.inner.write().await;
        inner.vehicles.insert(vehicle.vehicle_id, vehicle.clone());
        Ok(())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError> {
        let inner = self.inner.read().await;
        Ok(inner
            .vehicle_order
            .iter()
            .filter_map(|id| inner.vehicles.get(id).cloned())
            .collect())
    }

    async fn insert_slot(&self, slot: ParkingSlot) -> Result<ParkingSlot, GatewayError> {
        let mut inner = self.inner.write().await;
        if !inner.slots.contains_key(&slot.slot_id) {
            inner.slot_order.push(slot.slot_id);
        }
        inner.slots.insert(slot.slot_id, slot.clone());
        Ok(slot)
    }

    async fn get_slot(&self, id: SlotId) -> Result<Option<ParkingSlot>, GatewayError> {
        let inner = self.inner.read().await;
        Ok(inner.slots.get(&id).cloned())
    }

    async fn update_slot(&self, slot: &ParkingSlot) -> Result<(), GatewayError> {
        let mut inner = self.inner.write().await;
        inner.slots.insert(slot.slot_id, slot.clone());
        Ok(())
    }

    async fn list_slots(&self) -> Result<Vec<ParkingSlot>, GatewayError> {
        let inner = self.inner.read().await;
        Ok(inner
            .slot_order
            .iter()
            .filter_map(|id| inner.slots.get(id).cloned())
            .collect())
    }

    async fn first_free_slot(&self) -> Result<Option<ParkingSlot>, GatewayError> {
        let inner = self.inner.read().await;
        Ok(inner
            .slot_order
            .iter()
            .filter_map(|id| inner.slots.get(id))
            .find(|slot| slot.is_free())
            .cloned())
    }

    async fn slots_holding(&self, vehicle_id: VehicleId) -> Result<Vec<ParkingSlot>, GatewayError> {
        let inner = self.inner.read().await;
        Ok(inner
            .slot_order
            .iter()
            .filter_map(|id| inner.slots.get(id))
            .filter(|slot| slot.vehicle_id == Some(vehicle_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::VehicleType;

    fn make_vehicle(id: i64) -> Vehicle {
        let Some(entry) = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).single() else {
            panic!("valid timestamp");
        };
        Vehicle {
            vehicle_id: VehicleId::new(id),
            vehicle_type: VehicleType::TwoWheeler,
            entry_time: entry,
            exit_time: None,
            predicted_number_plate: None,
            actual_number_plate: None,
            parking_fees: 0,
        }
    }

    #[tokio::test]
    async fn insert_and_get_vehicle() {
        let store = MemoryStore::new();
        let _ = store.insert_vehicle(make_vehicle(1)).await;

        let fetched = store.get_vehicle(VehicleId::new(1)).await;
        assert!(matches!(fetched, Ok(Some(v)) if v.vehicle_id == VehicleId::new(1)));

        let missing = store.get_vehicle(VehicleId::new(2)).await;
        assert!(matches!(missing, Ok(None)));
    }

    #[tokio::test]
    async fn first_free_slot_respects_insertion_order() {
        let store = MemoryStore::new();
        for id in [3, 1, 2] {
            let _ = store
                .insert_slot(ParkingSlot::new(SlotId::new(id), "standard".to_string()))
                .await;
        }

        let mut occupied = ParkingSlot::new(SlotId::new(3), "standard".to_string());
        occupied.vehicle_id = Some(VehicleId::new(9));
        let _ = store.update_slot(&occupied).await;

        // Slot 3 was inserted first but is occupied; slot 1 is next in order.
        let free = store.first_free_slot().await;
        assert!(matches!(free, Ok(Some(s)) if s.slot_id == SlotId::new(1)));
    }

    #[tokio::test]
    async fn first_free_slot_returns_none_when_all_occupied() {
        let store = MemoryStore::new();
        let mut slot = ParkingSlot::new(SlotId::new(1), "standard".to_string());
        slot.vehicle_id = Some(VehicleId::new(5));
        let _ = store.insert_slot(slot).await;

        let free = store.first_free_slot().await;
        assert!(matches!(free, Ok(None)));
    }

    #[tokio::test]
    async fn slots_holding_finds_occupant() {
        let store = MemoryStore::new();
        let mut slot = ParkingSlot::new(SlotId::new(1), "standard".to_string());
        slot.vehicle_id = Some(VehicleId::new(5));
        let _ = store.insert_slot(slot).await;
        let _ = store
            .insert_slot(ParkingSlot::new(SlotId::new(2), "standard".to_string()))
            .await;

        let holding = store.slots_holding(VehicleId::new(5)).await;
        assert!(matches!(holding, Ok(slots) if slots.len() == 1));

        let none = store.slots_holding(VehicleId::new(6)).await;
        assert!(matches!(none, Ok(slots) if slots.is_empty()));
    }
}
