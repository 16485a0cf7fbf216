//! Domain layer: entities, identifiers, and fee calculation.
//!
//! This module contains the parking-lot domain model: vehicle sessions,
//! parking slots, type-safe identifiers, and the pure fee calculator.

pub mod fee;
pub mod ids;
pub mod slot;
pub mod vehicle;

pub use ids::{SlotId, VehicleId};
pub use slot::ParkingSlot;
pub use vehicle::{Vehicle, VehicleType};
