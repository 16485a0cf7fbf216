//! # carpark-gateway
//!
//! REST API gateway for parking-lot management.
//!
//! This crate records vehicle entries and exits, computes parking fees
//! per started hour, and assigns vehicles to parking slots. HTTP routing
//! and storage are thin layers around a small domain core.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── VehicleService / SlotService (service/)
//!     │
//!     ├── Domain: entities + fee calculator (domain/)
//!     │
//!     └── LotStore: PostgreSQL or in-memory (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
