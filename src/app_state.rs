//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{SlotService, VehicleService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Vehicle registry: entry registration and exit recording.
    pub vehicle_service: Arc<VehicleService>,
    /// Slot allocator: creation, assignment, and release.
    pub slot_service: Arc<SlotService>,
}
