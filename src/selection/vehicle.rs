//! Vehicle feasibility filtering and multi-criteria scoring.
//!
//! # Algorithm
//!
//! A hard feasibility filter (availability plus capacity in both the weight
//! and the volume dimension) runs before any scoring; an infeasible fleet is
//! an error, never a degraded recommendation. Feasible vehicles are then
//! ranked by a weighted sum of four normalized sub-scores:
//!
//! ```text
//! score = 0.30 * 1 / (cost_per_km * distance)       // cost efficiency
//!       + 0.30 * (w_util + v_util) / 2              // capacity utilization
//!       + 0.20 * fuel_efficiency / 100              // fuel efficiency
//!       + 0.20 * 1 / (co2_per_km / 1000)            // environmental
//! ```

use tracing::debug;

use crate::error::OptimizeError;
use crate::models::Vehicle;

const COST_WEIGHT: f64 = 0.30;
const UTILIZATION_WEIGHT: f64 = 0.30;
const FUEL_WEIGHT: f64 = 0.20;
const ENVIRONMENTAL_WEIGHT: f64 = 0.20;

/// Combined suitability score of a vehicle for the given load and distance.
///
/// Higher is better. Exposed so callers can audit how a recommendation came
/// about; [`select_vehicle`] applies it after the feasibility filter.
pub fn vehicle_score(
    vehicle: &Vehicle,
    total_weight_kg: f64,
    total_volume_m3: f64,
    total_distance_km: f64,
) -> f64 {
    let capacity = vehicle.capacity();

    let cost_efficiency = 1.0 / (vehicle.cost_per_km() * total_distance_km);
    let capacity_utilization =
        (total_weight_kg / capacity.weight_kg + total_volume_m3 / capacity.volume_m3) / 2.0;
    let fuel_efficiency = vehicle.fuel_efficiency_km_per_l() / 100.0;
    let environmental = 1.0 / (vehicle.co2_g_per_km() / 1000.0);

    cost_efficiency * COST_WEIGHT
        + capacity_utilization * UTILIZATION_WEIGHT
        + fuel_efficiency * FUEL_WEIGHT
        + environmental * ENVIRONMENTAL_WEIGHT
}

/// Selects the best feasible vehicle for an aggregate load over a tour.
///
/// Feasible means available and able to carry the load in both dimensions.
/// Among feasible vehicles the highest [`vehicle_score`] wins; ties are
/// broken by fleet order (first occurrence wins), so selection is
/// deterministic for identical fleet data and inputs.
///
/// # Errors
///
/// [`OptimizeError::EmptyFleet`] when the fleet holds no vehicles, and
/// [`OptimizeError::NoSuitableVehicle`] when the feasibility filter leaves
/// nothing.
///
/// # Examples
///
/// ```
/// use pickup_routing::fleet::standard_fleet;
/// use pickup_routing::selection::select_vehicle;
///
/// let fleet = standard_fleet();
/// // 15 kg fits the bike, but 0.8 m³ exceeds its 0.5 m³ hold: the auto wins.
/// let v = select_vehicle(&fleet, 15.0, 0.8, 12.0).expect("feasible");
/// assert_eq!(v.id(), "auto-1");
/// ```
pub fn select_vehicle(
    fleet: &[Vehicle],
    total_weight_kg: f64,
    total_volume_m3: f64,
    total_distance_km: f64,
) -> Result<&Vehicle, OptimizeError> {
    if fleet.is_empty() {
        return Err(OptimizeError::EmptyFleet);
    }

    let mut best: Option<(&Vehicle, f64)> = None;
    for vehicle in fleet {
        if !vehicle.is_available() || !vehicle.can_carry(total_weight_kg, total_volume_m3) {
            continue;
        }
        let score = vehicle_score(vehicle, total_weight_kg, total_volume_m3, total_distance_km);
        debug!(vehicle = vehicle.id(), score, "scored feasible vehicle");
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((vehicle, score)),
        }
    }

    match best {
        Some((vehicle, _)) => Ok(vehicle),
        None => Err(OptimizeError::NoSuitableVehicle {
            weight_kg: total_weight_kg,
            volume_m3: total_volume_m3,
        }),
    }
}
