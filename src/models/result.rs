//! Optimization result record.

use serde::{Deserialize, Serialize};

use super::{Driver, Location, Vehicle};

/// Environmental footprint of a planned tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    /// Total CO₂ emission in grams, rounded to the nearest gram.
    pub co2_grams: f64,
    /// Total fuel consumption in liters, rounded to two decimals.
    pub fuel_liters: f64,
}

/// The plan produced by one optimization call.
///
/// A plain value with no lifecycle of its own: created fresh per call, never
/// stored or mutated by the engine. Downstream consumers treat the derived
/// numbers as authoritative.
///
/// The route holds the pickups in visiting order; the depot bookends the tour
/// but is not part of the sequence. `total_distance_km` covers the full
/// depot → route → depot path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Pickups in visiting order (depot excluded).
    pub route: Vec<Location>,
    /// Full tour distance in kilometers, rounded to two decimals.
    pub total_distance_km: f64,
    /// Tour cost in currency units, rounded to two decimals.
    pub total_cost: f64,
    /// Tour duration in minutes at an assumed 30 km/h, rounded to the
    /// nearest minute.
    pub total_time_minutes: f64,
    /// Capacity-utilization score in `[0, 100]`, rounded to two decimals.
    pub efficiency: f64,
    /// The vehicle chosen for the tour.
    pub selected_vehicle: Vehicle,
    /// The driver assigned to the tour.
    pub assigned_driver: Driver,
    /// CO₂ and fuel figures for the tour.
    pub environmental_impact: EnvironmentalImpact,
}
