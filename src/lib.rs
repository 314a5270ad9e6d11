//! # pickup-routing
//!
//! Logistics route-optimization engine for single-vehicle pickup tours:
//! orders stops into a travel route, selects the most suitable fleet vehicle
//! under hard capacity constraints, assigns a driver, and derives distance,
//! cost, time, and environmental-impact metrics for the plan.
//!
//! The engine is a pure, synchronous computation over read-only fleet and
//! driver reference data: no I/O, no hidden state, identical inputs give
//! identical outputs.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Location, Vehicle, Driver, OptimizationResult)
//! - [`distance`] — Haversine great-circle distance and the stop matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt tour improvement
//! - [`selection`] — Vehicle scoring/selection and driver assignment
//! - [`fleet`] — Injected fleet/driver configuration and standard data
//! - [`optimizer`] — The orchestrator tying the pipeline together
//! - [`error`] — Typed optimization errors
//!
//! ## Example
//!
//! ```
//! use pickup_routing::fleet::{sample_pickups, standard_depot, FleetConfig};
//! use pickup_routing::optimizer::optimize;
//!
//! let config = FleetConfig::standard();
//! let plan = optimize(&sample_pickups(), &standard_depot(), &config)
//!     .expect("standard fleet can serve the sample load");
//!
//! assert_eq!(plan.route.len(), 6);
//! assert!(plan.selected_vehicle.can_carry(100.0, 5.7));
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod fleet;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod selection;
