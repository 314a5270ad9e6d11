//! Domain model types for the pickup-routing engine.
//!
//! Provides the core records: pickup locations with load and advisory time
//! windows, fleet vehicles with capacity and emission parameters, drivers,
//! and the result produced by an optimization call.

mod driver;
mod location;
mod result;
mod vehicle;

pub use driver::{Driver, DriverStatus};
pub use location::{Location, Priority, TimeWindow};
pub use result::{EnvironmentalImpact, OptimizationResult};
pub use vehicle::{Capacity, Vehicle, VehicleType};
