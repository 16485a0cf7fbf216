//! Type-safe identifiers for vehicles and parking slots.
//!
//! Both IDs are externally supplied integers (the gateway never generates
//! them). Newtype wrappers keep the two ID spaces from being confused.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a vehicle parking session.
///
/// Supplied by the client at entry time and immutable thereafter. Used as
/// the lookup key in the persistence layer and as the occupancy marker on
/// [`super::ParkingSlot`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct VehicleId(i64);

impl VehicleId {
    /// Creates a `VehicleId` from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<VehicleId> for i64 {
    fn from(id: VehicleId) -> Self {
        id.0
    }
}

/// Unique identifier for a physical parking slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct SlotId(i64);

impl SlotId {
    /// Creates a `SlotId` from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SlotId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SlotId> for i64 {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serde_is_transparent() {
        let id = VehicleId::new(42);
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("42"));

        let parsed: Option<SlotId> = serde_json::from_str("7").ok();
        assert_eq!(parsed, Some(SlotId::new(7)));
    }

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(format!("{}", VehicleId::new(9)), "9");
        assert_eq!(format!("{}", SlotId::new(-1)), "-1");
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = VehicleId::new(1);
        let mut map = HashMap::new();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
