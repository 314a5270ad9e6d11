//! Driver registry types.

use serde::{Deserialize, Serialize};

/// Dispatch status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    /// Ready to take a tour.
    Available,
    /// Currently on a tour.
    Busy,
    /// Off shift.
    Offline,
}

/// A driver: static reference data, read-only for the optimizer.
///
/// Each driver operates exactly one vehicle, referenced by `vehicle_id`.
/// Status mutation (e.g. marking a driver busy after dispatch) belongs to the
/// surrounding system, not to this engine.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Driver, DriverStatus};
///
/// let d = Driver::new("driver-1", "Rajesh Kumar", "+91 98765 43210", 4.8,
///     13.0827, 80.2707, "tempo-1");
/// assert_eq!(d.status(), DriverStatus::Available);
/// assert_eq!(d.vehicle_id(), "tempo-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    id: String,
    name: String,
    phone: String,
    rating: f64,
    lat: f64,
    lng: f64,
    status: DriverStatus,
    vehicle_id: String,
}

impl Driver {
    /// Creates a new driver, marked available.
    ///
    /// `rating` is a 0–5 score; `lat`/`lng` is the driver's current position.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        rating: f64,
        lat: f64,
        lng: f64,
        vehicle_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            rating,
            lat,
            lng,
            status: DriverStatus::Available,
            vehicle_id: vehicle_id.into(),
        }
    }

    /// Sets the dispatch status.
    pub fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    /// Unique driver identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Driver rating, 0–5.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Current latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Current longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Dispatch status.
    pub fn status(&self) -> DriverStatus {
        self.status
    }

    /// Identifier of the single vehicle this driver operates.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }
}
