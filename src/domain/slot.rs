//! Parking slot entity.

use serde::{Deserialize, Serialize};

use super::{SlotId, VehicleId};

/// One physical parking slot.
///
/// A slot is `Free` when `vehicle_id` is `None` and `Occupied` otherwise.
/// Assignment overwrites the occupant unconditionally; release clears it.
/// Slots are created empty and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingSlot {
    /// Externally supplied unique identifier.
    pub slot_id: SlotId,
    /// Free-text classification (not validated against vehicle type).
    pub slot_type: String,
    /// Currently parked vehicle; `None` means the slot is free.
    pub vehicle_id: Option<VehicleId>,
}

impl ParkingSlot {
    /// Creates a new empty slot.
    #[must_use]
    pub const fn new(slot_id: SlotId, slot_type: String) -> Self {
        Self {
            slot_id,
            slot_type,
            vehicle_id: None,
        }
    }

    /// Returns `true` if no vehicle occupies this slot.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.vehicle_id.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_free() {
        let slot = ParkingSlot::new(SlotId::new(1), "compact".to_string());
        assert!(slot.is_free());
    }

    #[test]
    fn occupied_slot_is_not_free() {
        let mut slot = ParkingSlot::new(SlotId::new(1), "compact".to_string());
        slot.vehicle_id = Some(VehicleId::new(9));
        assert!(!slot.is_free());
    }
}
