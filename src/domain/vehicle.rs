//! Vehicle entity and the closed vehicle-type enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VehicleId;
use crate::error::GatewayError;

/// Recognized vehicle categories, each with a fixed hourly rate.
///
/// The original wire format is a free-form string; [`VehicleType::parse`]
/// normalizes it (case-insensitive) at the boundary so the rest of the
/// gateway works with a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    /// Two-wheeled vehicles (motorcycles, scooters).
    #[serde(rename = "2 wheeler")]
    TwoWheeler,
    /// Four-wheeled vehicles (cars, vans).
    #[serde(rename = "4 wheeler")]
    FourWheeler,
}

impl VehicleType {
    /// Parses a vehicle-type string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidVehicleType`] for anything other than
    /// `"2 wheeler"` or `"4 wheeler"`.
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        match raw.to_lowercase().as_str() {
            "2 wheeler" => Ok(Self::TwoWheeler),
            "4 wheeler" => Ok(Self::FourWheeler),
            _ => Err(GatewayError::InvalidVehicleType(raw.to_string())),
        }
    }

    /// Returns the canonical wire string for this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwoWheeler => "2 wheeler",
            Self::FourWheeler => "4 wheeler",
        }
    }

    /// Hourly parking rate for this vehicle type.
    #[must_use]
    pub const fn hourly_rate(&self) -> i64 {
        match self {
            Self::TwoWheeler => 20,
            Self::FourWheeler => 40,
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parking session for one vehicle.
///
/// Created at entry with a zero fee; `exit_time` and `parking_fees` are
/// set exactly once when the exit is recorded. Records are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Externally supplied unique identifier.
    pub vehicle_id: VehicleId,
    /// Vehicle category, determines the hourly rate.
    pub vehicle_type: VehicleType,
    /// Entry timestamp (UTC).
    pub entry_time: DateTime<Utc>,
    /// Exit timestamp; `None` while the vehicle is still parked.
    pub exit_time: Option<DateTime<Utc>>,
    /// Number plate as read by the recognition system.
    pub predicted_number_plate: Option<String>,
    /// Number plate as confirmed by an operator.
    pub actual_number_plate: Option<String>,
    /// Total fee; zero until the exit is recorded.
    pub parking_fees: i64,
}

impl Vehicle {
    /// Returns `true` while the session has no recorded exit.
    #[must_use]
    pub const fn is_parked(&self) -> bool {
        self.exit_time.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            VehicleType::parse("2 Wheeler").ok(),
            Some(VehicleType::TwoWheeler)
        );
        assert_eq!(
            VehicleType::parse("4 WHEELER").ok(),
            Some(VehicleType::FourWheeler)
        );
    }

    #[test]
    fn parse_rejects_unknown_types() {
        let err = VehicleType::parse("3 wheeler");
        assert!(matches!(err, Err(GatewayError::InvalidVehicleType(_))));

        let err = VehicleType::parse("");
        assert!(matches!(err, Err(GatewayError::InvalidVehicleType(_))));
    }

    #[test]
    fn hourly_rates() {
        assert_eq!(VehicleType::TwoWheeler.hourly_rate(), 20);
        assert_eq!(VehicleType::FourWheeler.hourly_rate(), 40);
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&VehicleType::TwoWheeler).ok();
        assert_eq!(json.as_deref(), Some("\"2 wheeler\""));

        let parsed: Option<VehicleType> = serde_json::from_str("\"4 wheeler\"").ok();
        assert_eq!(parsed, Some(VehicleType::FourWheeler));
    }
}
