//! Error types for the optimization pipeline.

use thiserror::Error;

/// Failure of an optimization request.
///
/// Capacity infeasibility is terminal: the engine never substitutes an
/// undersized vehicle or coerces a failure into a zero-valued plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// No available vehicle can carry the aggregate load in both the weight
    /// and the volume dimension.
    #[error("no suitable vehicle available for {weight_kg} kg / {volume_m3} m³")]
    NoSuitableVehicle {
        /// Aggregate pickup weight in kilograms.
        weight_kg: f64,
        /// Aggregate pickup volume in cubic meters.
        volume_m3: f64,
    },

    /// The fleet registry holds no vehicles at all.
    #[error("fleet registry is empty")]
    EmptyFleet,

    /// The driver registry holds no drivers at all.
    #[error("driver registry is empty")]
    EmptyDriverRegistry,
}
