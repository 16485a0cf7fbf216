//! Pure parking-fee calculation.
//!
//! Fees are billed per started hour: any positive remainder within an hour
//! rounds up to a full additional hour. All arithmetic happens on UTC
//! timestamps; offset conversion is done at the API boundary when requests
//! are deserialized.

use chrono::{DateTime, Utc};

use super::VehicleType;

/// Seconds per billed hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of hours billed for the interval `entry..exit`.
///
/// A duration of exactly zero seconds bills zero hours. Non-positive
/// durations (exit at or before entry) also bill zero.
#[must_use]
pub fn billed_hours(entry: DateTime<Utc>, exit: DateTime<Utc>) -> i64 {
    let seconds = (exit - entry).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    // Ceiling division: a started hour bills as a full hour.
    (seconds + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR
}

/// Total parking fee for a session.
///
/// Returns 0 while the vehicle is still parked (`exit` is `None`);
/// otherwise billed hours times the hourly rate for `vehicle_type`.
#[must_use]
pub fn parking_fee(
    entry: DateTime<Utc>,
    exit: Option<DateTime<Utc>>,
    vehicle_type: VehicleType,
) -> i64 {
    match exit {
        Some(exit) => billed_hours(entry, exit) * vehicle_type.hourly_rate(),
        None => 0,
    }
}
