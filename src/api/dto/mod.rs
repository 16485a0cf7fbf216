//! Data Transfer Objects for REST request/response serialization.

pub mod slot_dto;
pub mod vehicle_dto;

pub use slot_dto::*;
pub use vehicle_dto::*;
