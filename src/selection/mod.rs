//! Vehicle selection and driver assignment.
//!
//! - [`select_vehicle`] — feasibility filter + weighted multi-criteria score
//! - [`vehicle_score`] — the raw score, exposed for auditability
//! - [`assign_driver`] — vehicle-to-driver lookup with documented fallback

mod driver;
mod vehicle;

pub use driver::assign_driver;
pub use vehicle::{select_vehicle, vehicle_score};
