//! Optimization orchestrator.
//!
//! Composes the pipeline: aggregate the load, construct and improve the
//! visiting order, measure the full depot → route → depot tour, select a
//! vehicle, assign a driver, and derive the cost/time/environmental metrics
//! of the plan.
//!
//! The whole pipeline is a pure, synchronous computation over read-only
//! reference data: identical inputs produce identical results, and
//! concurrent calls can share one [`FleetConfig`] without locking.

use tracing::debug;

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::OptimizeError;
use crate::fleet::FleetConfig;
use crate::local_search::{route_distance, two_opt_improve};
use crate::models::{EnvironmentalImpact, Location, OptimizationResult};
use crate::selection::{assign_driver, select_vehicle};

/// Assumed average travel speed for duration estimates, km/h.
const AVERAGE_SPEED_KMH: f64 = 30.0;

/// The optimization engine, configured with a fleet and optional limits.
///
/// # Examples
///
/// ```
/// use pickup_routing::fleet::{sample_pickups, standard_depot, FleetConfig};
/// use pickup_routing::optimizer::Optimizer;
///
/// let config = FleetConfig::standard();
/// let result = Optimizer::new(&config)
///     .optimize(&sample_pickups(), &standard_depot())
///     .expect("standard fleet can serve the sample load");
/// assert_eq!(result.route.len(), 6);
/// assert!(result.total_distance_km > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer<'a> {
    fleet: &'a FleetConfig,
    max_improvement_passes: Option<usize>,
}

impl<'a> Optimizer<'a> {
    /// Creates an optimizer over the given fleet configuration.
    pub fn new(fleet: &'a FleetConfig) -> Self {
        Self {
            fleet,
            max_improvement_passes: None,
        }
    }

    /// Caps the number of 2-opt improvement passes.
    ///
    /// When the cap is hit the best route found so far is used; without a
    /// cap the improvement loop runs to a local optimum.
    pub fn with_max_improvement_passes(mut self, passes: usize) -> Self {
        self.max_improvement_passes = Some(passes);
        self
    }

    /// Plans a single-vehicle tour over the given pickups from the depot.
    ///
    /// # Errors
    ///
    /// Propagates [`OptimizeError::NoSuitableVehicle`] /
    /// [`OptimizeError::EmptyFleet`] from vehicle selection and
    /// [`OptimizeError::EmptyDriverRegistry`] from driver assignment
    /// unchanged; capacity infeasibility is never downgraded to a default
    /// plan.
    pub fn optimize(
        &self,
        pickups: &[Location],
        depot: &Location,
    ) -> Result<OptimizationResult, OptimizeError> {
        let total_weight: f64 = pickups.iter().map(|p| p.weight_kg()).sum();
        let total_volume: f64 = pickups.iter().map(|p| p.volume_m3()).sum();
        debug!(
            pickups = pickups.len(),
            total_weight, total_volume, "starting optimization"
        );

        let distances = DistanceMatrix::from_stops(depot, pickups);
        let initial = nearest_neighbor(&distances);
        let order = two_opt_improve(&initial, &distances, self.max_improvement_passes);
        let total_distance = route_distance(&order, &distances);
        debug!(stops = order.len(), total_distance, "route finalized");

        let vehicle = select_vehicle(
            self.fleet.vehicles(),
            total_weight,
            total_volume,
            total_distance,
        )?
        .clone();
        let driver = assign_driver(self.fleet.drivers(), vehicle.id())?.clone();
        debug!(
            vehicle = vehicle.id(),
            driver = driver.id(),
            "vehicle and driver assigned"
        );

        let capacity = vehicle.capacity();
        let total_cost = total_distance * vehicle.cost_per_km();
        let total_time = total_distance / AVERAGE_SPEED_KMH * 60.0;
        let fuel_liters = total_distance / vehicle.fuel_efficiency_km_per_l();
        let co2_grams = total_distance * vehicle.co2_g_per_km();
        let utilization = ((total_weight / capacity.weight_kg
            + total_volume / capacity.volume_m3)
            / 2.0)
            .min(1.0);

        let route = order.iter().map(|&i| pickups[i - 1].clone()).collect();

        Ok(OptimizationResult {
            route,
            total_distance_km: round2(total_distance),
            total_cost: round2(total_cost),
            total_time_minutes: total_time.round(),
            efficiency: round2(utilization * 100.0),
            selected_vehicle: vehicle,
            assigned_driver: driver,
            environmental_impact: EnvironmentalImpact {
                co2_grams: co2_grams.round(),
                fuel_liters: round2(fuel_liters),
            },
        })
    }
}

/// Plans a tour with the default optimizer settings.
///
/// Convenience wrapper over [`Optimizer::optimize`].
///
/// # Examples
///
/// ```
/// use pickup_routing::fleet::FleetConfig;
/// use pickup_routing::models::Location;
/// use pickup_routing::optimizer::optimize;
///
/// let config = FleetConfig::standard();
/// let depot = Location::depot("depot", "Hub", "OMR, Chennai", 13.0827, 80.2707);
/// let pickups = vec![
///     Location::new("p1", "T. Nagar", "Pondy Bazaar", 13.0418, 80.2341, 15.0, 0.8),
/// ];
///
/// let result = optimize(&pickups, &depot, &config).expect("feasible");
/// assert_eq!(result.route[0].id(), "p1");
/// assert_eq!(result.selected_vehicle.id(), "auto-1");
/// ```
pub fn optimize(
    pickups: &[Location],
    depot: &Location,
    fleet: &FleetConfig,
) -> Result<OptimizationResult, OptimizeError> {
    Optimizer::new(fleet).optimize(pickups, depot)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
