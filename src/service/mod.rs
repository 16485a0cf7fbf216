//! Service layer: vehicle registry and slot allocation orchestration.

pub mod slot_service;
pub mod vehicle_service;

pub use slot_service::SlotService;
pub use vehicle_service::{NewVehicle, VehicleService};
