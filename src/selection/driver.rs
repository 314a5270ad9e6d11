//! Driver assignment.

use tracing::warn;

use crate::error::OptimizeError;
use crate::models::{Driver, DriverStatus};

/// Assigns a driver for the selected vehicle.
///
/// Picks the first driver who is available and operates the given vehicle.
/// When no such driver exists the registry's first driver is assigned
/// regardless of status or vehicle match, with a warning. That soft fallback
/// mirrors the dispatch policy this engine was built against; a stricter
/// deployment would surface the mismatch as its own error instead.
///
/// # Errors
///
/// [`OptimizeError::EmptyDriverRegistry`] when the registry holds no drivers.
///
/// # Examples
///
/// ```
/// use pickup_routing::fleet::standard_drivers;
/// use pickup_routing::selection::assign_driver;
///
/// let drivers = standard_drivers();
/// let d = assign_driver(&drivers, "van-1").expect("registry not empty");
/// assert_eq!(d.id(), "driver-2");
/// ```
pub fn assign_driver<'a>(
    drivers: &'a [Driver],
    vehicle_id: &str,
) -> Result<&'a Driver, OptimizeError> {
    if drivers.is_empty() {
        return Err(OptimizeError::EmptyDriverRegistry);
    }

    match drivers
        .iter()
        .find(|d| d.status() == DriverStatus::Available && d.vehicle_id() == vehicle_id)
    {
        Some(driver) => Ok(driver),
        None => {
            let fallback = &drivers[0];
            warn!(
                vehicle = vehicle_id,
                driver = fallback.id(),
                "no available driver for vehicle, falling back to first registered driver"
            );
            Ok(fallback)
        }
    }
}
