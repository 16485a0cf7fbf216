//! Slot allocation service: create, find-free, assign, release.

use std::sync::Arc;

use crate::domain::{ParkingSlot, SlotId, VehicleId};
use crate::error::GatewayError;
use crate::persistence::LotStore;

/// Orchestration layer for parking-slot operations.
///
/// Stateless coordinator over the [`LotStore`]. A slot moves between
/// `Free` and `Occupied` by setting or clearing its `vehicle_id`;
/// assignment carries no guard and overwrites any previous occupant.
#[derive(Debug, Clone)]
pub struct SlotService {
    store: Arc<dyn LotStore>,
}

impl SlotService {
    /// Creates a new `SlotService`.
    #[must_use]
    pub fn new(store: Arc<dyn LotStore>) -> Self {
        Self { store }
    }

    /// Creates a new empty slot.
    ///
    /// Uniqueness of `slot_id` is left to the store.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] on storage failure.
    pub async fn create_slot(
        &self,
        slot_id: SlotId,
        slot_type: String,
    ) -> Result<ParkingSlot, GatewayError> {
        let slot = self
            .store
            .insert_slot(ParkingSlot::new(slot_id, slot_type))
            .await?;

        tracing::info!(%slot_id, slot_type = %slot.slot_type, "parking slot created");
        Ok(slot)
    }

    /// Returns the first free slot in insertion order, `None` if all occupied.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] on storage failure.
    pub async fn find_free_slot(&self) -> Result<Option<ParkingSlot>, GatewayError> {
        self.store.first_free_slot().await
    }

    /// Parks `vehicle_id` in the given slot, overwriting any occupant.
    ///
    /// The overwrite is intentional (matching the original allocation
    /// rules) but logged so occupancy conflicts are visible.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SlotNotFound`] if the slot does not exist.
    pub async fn assign(
        &self,
        slot_id: SlotId,
        vehicle_id: VehicleId,
    ) -> Result<ParkingSlot, GatewayError> {
        let mut slot = self
            .store
            .get_slot(slot_id)
            .await?
            .ok_or(GatewayError::SlotNotFound(slot_id))?;

        if let Some(previous) = slot.vehicle_id
            && previous != vehicle_id
        {
            tracing::warn!(%slot_id, %previous, %vehicle_id, "overwriting occupied slot");
        }

        slot.vehicle_id = Some(vehicle_id);
        self.store.update_slot(&slot).await?;

        tracing::info!(%slot_id, %vehicle_id, "vehicle parked in slot");
        Ok(slot)
    }

    /// Frees every slot currently holding `vehicle_id`; no-op if none.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] on storage failure.
    pub async fn release_vehicle(&self, vehicle_id: VehicleId) -> Result<(), GatewayError> {
        let held = self.store.slots_holding(vehicle_id).await?;
        for mut slot in held {
            slot.vehicle_id = None;
            self.store.update_slot(&slot).await?;
            tracing::info!(slot_id = %slot.slot_id, %vehicle_id, "slot released");
        }
        Ok(())
    }

    /// Returns all slots in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] on storage failure.
    pub async fn list_slots(&self) -> Result<Vec<ParkingSlot>, GatewayError> {
        self.store.list_slots().await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn make_service() -> SlotService {
        SlotService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_slot_starts_free() {
        let service = make_service();
        let slot = service
            .create_slot(SlotId::new(1), "standard".to_string())
            .await;
        assert!(matches!(slot, Ok(s) if s.is_free()));
    }

    #[tokio::test]
    async fn assign_unknown_slot_is_not_found() {
        let service = make_service();
        let result = service.assign(SlotId::new(99), VehicleId::new(1)).await;
        assert!(matches!(result, Err(GatewayError::SlotNotFound(_))));
    }

    #[tokio::test]
    async fn assign_overwrites_occupant() {
        let service = make_service();
        let _ = service
            .create_slot(SlotId::new(1), "standard".to_string())
            .await;

        let _ = service.assign(SlotId::new(1), VehicleId::new(5)).await;
        let reassigned = service.assign(SlotId::new(1), VehicleId::new(6)).await;
        assert!(matches!(reassigned, Ok(s) if s.vehicle_id == Some(VehicleId::new(6))));
    }

    #[tokio::test]
    async fn release_clears_matching_slots_only() {
        let service = make_service();
        let _ = service
            .create_slot(SlotId::new(1), "standard".to_string())
            .await;
        let _ = service
            .create_slot(SlotId::new(2), "standard".to_string())
            .await;
        let _ = service.assign(SlotId::new(1), VehicleId::new(5)).await;
        let _ = service.assign(SlotId::new(2), VehicleId::new(6)).await;

        let result = service.release_vehicle(VehicleId::new(5)).await;
        assert!(result.is_ok());

        let slots = service.list_slots().await.unwrap_or_default();
        let slot1 = slots.iter().find(|s| s.slot_id == SlotId::new(1));
        let slot2 = slots.iter().find(|s| s.slot_id == SlotId::new(2));
        assert!(matches!(slot1, Some(s) if s.is_free()));
        assert!(matches!(slot2, Some(s) if s.vehicle_id == Some(VehicleId::new(6))));
    }

    #[tokio::test]
    async fn release_without_held_slot_is_noop() {
        let service = make_service();
        let result = service.release_vehicle(VehicleId::new(42)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn find_free_slot_skips_occupied() {
        let service = make_service();
        let _ = service
            .create_slot(SlotId::new(1), "standard".to_string())
            .await;
        let _ = service
            .create_slot(SlotId::new(2), "standard".to_string())
            .await;
        let _ = service.assign(SlotId::new(1), VehicleId::new(5)).await;

        let free = service.find_free_slot().await;
        assert!(matches!(free, Ok(Some(s)) if s.slot_id == SlotId::new(2)));
    }
}
