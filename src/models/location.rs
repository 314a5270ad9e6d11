//! Pickup location and advisory time window types.

use serde::{Deserialize, Serialize};

/// Pickup priority classification.
///
/// Currently informational: priority is carried through the pipeline but is
/// not used in route ordering or vehicle feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Collect as early as possible.
    High,
    /// Normal scheduling.
    Medium,
    /// May be deferred.
    Low,
}

/// An advisory pickup window given as wall-clock strings (e.g. `"09:00"`).
///
/// The optimizer records windows on locations but does not enforce them as a
/// hard constraint; scheduling against them is a dispatcher concern.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::TimeWindow;
///
/// let tw = TimeWindow::new("09:00", "12:00");
/// assert_eq!(tw.start(), "09:00");
/// assert_eq!(tw.end(), "12:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: String,
    end: String,
}

impl TimeWindow {
    /// Creates a new advisory window.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Earliest acceptable pickup time.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Latest acceptable pickup time.
    pub fn end(&self) -> &str {
        &self.end
    }
}

/// A point to visit: either a pickup stop or the depot.
///
/// Locations are immutable once constructed. The depot is an ordinary
/// location with zero weight and volume; it is the fixed start and end of
/// every tour and never appears in an optimized route sequence.
///
/// Coordinates are WGS-84 degrees. Weight is in kilograms, volume in cubic
/// meters; both are expected to be non-negative.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Location, Priority};
///
/// let depot = Location::depot("depot", "Logistics Hub", "OMR, Chennai", 13.0827, 80.2707);
/// assert_eq!(depot.weight_kg(), 0.0);
///
/// let stop = Location::new("p1", "T. Nagar Pickup", "Pondy Bazaar", 13.0418, 80.2341, 15.0, 0.8)
///     .with_priority(Priority::High);
/// assert_eq!(stop.id(), "p1");
/// assert_eq!(stop.priority(), Priority::High);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    id: String,
    name: String,
    address: String,
    lat: f64,
    lng: f64,
    weight_kg: f64,
    volume_m3: f64,
    priority: Priority,
    time_window: Option<TimeWindow>,
}

impl Location {
    /// Creates a new pickup location.
    ///
    /// Default: medium priority, no time window.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        lat: f64,
        lng: f64,
        weight_kg: f64,
        volume_m3: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            lat,
            lng,
            weight_kg,
            volume_m3,
            priority: Priority::Medium,
            time_window: None,
        }
    }

    /// Creates a depot at the given coordinates (zero weight and volume).
    pub fn depot(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self::new(id, name, address, lat, lng, 0.0, 0.0)
    }

    /// Sets the pickup priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets an advisory time window for this location.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Unique location identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Load weight at this location in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Load volume at this location in cubic meters.
    pub fn volume_m3(&self) -> f64 {
        self.volume_m3
    }

    /// Pickup priority (informational).
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Advisory time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// Great-circle distance to another location in kilometers.
    pub fn distance_to(&self, other: &Location) -> f64 {
        crate::distance::haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}
