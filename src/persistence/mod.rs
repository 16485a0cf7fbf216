//! Persistence layer: the [`LotStore`] trait and its implementations.
//!
//! The services never touch storage directly; they go through the
//! object-safe [`LotStore`] trait. Two implementations exist: an
//! in-memory store (tests, or `PERSISTENCE_ENABLED=false`) and a
//! PostgreSQL store backed by `sqlx::PgPool`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{ParkingSlot, SlotId, Vehicle, VehicleId};
use crate::error::GatewayError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage interface for vehicle sessions and parking slots.
///
/// Each method is one storage round-trip; the gateway does not wrap
/// multi-step sequences in a transaction, so a crash between a vehicle
/// insert and its slot assignment can leave the vehicle unassigned.
#[async_trait]
pub trait LotStore: Send + Sync + std::fmt::Debug {
    /// Persists a new vehicle record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn insert_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, GatewayError>;

    /// Fetches a vehicle by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn get_vehicle(&self, id: VehicleId) -> Result<Option<Vehicle>, GatewayError>;

    /// Overwrites an existing vehicle record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<(), GatewayError>;

    /// Lists all vehicle records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, GatewayError>;

    /// Persists a new parking slot.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn insert_slot(&self, slot: ParkingSlot) -> Result<ParkingSlot, GatewayError>;

    /// Fetches a slot by ID, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn get_slot(&self, id: SlotId) -> Result<Option<ParkingSlot>, GatewayError>;

    /// Overwrites an existing slot record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn update_slot(&self, slot: &ParkingSlot) -> Result<(), GatewayError>;

    /// Lists all slots in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn list_slots(&self) -> Result<Vec<ParkingSlot>, GatewayError>;

    /// Returns the first free slot in insertion order, `None` if all occupied.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn first_free_slot(&self) -> Result<Option<ParkingSlot>, GatewayError>;

    /// Returns every slot currently holding the given vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure.
    async fn slots_holding(&self, vehicle_id: VehicleId) -> Result<Vec<ParkingSlot>, GatewayError>;
}
