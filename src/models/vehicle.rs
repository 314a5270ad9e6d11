//! Fleet vehicle types with capacity, cost, and emission parameters.

use serde::{Deserialize, Serialize};

/// Vehicle class within the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Two-wheeler for small parcels.
    Bike,
    /// Auto rickshaw.
    Auto,
    /// Light commercial tempo.
    Tempo,
    /// Cargo van.
    Van,
    /// Pickup truck.
    Truck,
}

/// Maximum load a vehicle can carry, in both constraint dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    /// Maximum weight in kilograms.
    pub weight_kg: f64,
    /// Maximum volume in cubic meters.
    pub volume_m3: f64,
}

/// A fleet member: static reference data, read-only for the optimizer.
///
/// # Examples
///
/// ```
/// use pickup_routing::models::{Capacity, Vehicle, VehicleType};
///
/// let v = Vehicle::new("bike-1", VehicleType::Bike, "Delivery Bike",
///     Capacity { weight_kg: 20.0, volume_m3: 0.5 }, 3.0, 45.0, 50.0);
/// assert!(v.is_available());
/// assert_eq!(v.capacity().weight_kg, 20.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    vehicle_type: VehicleType,
    name: String,
    capacity: Capacity,
    cost_per_km: f64,
    fuel_efficiency_km_per_l: f64,
    co2_g_per_km: f64,
    available: bool,
}

impl Vehicle {
    /// Creates a new vehicle, marked available.
    pub fn new(
        id: impl Into<String>,
        vehicle_type: VehicleType,
        name: impl Into<String>,
        capacity: Capacity,
        cost_per_km: f64,
        fuel_efficiency_km_per_l: f64,
        co2_g_per_km: f64,
    ) -> Self {
        Self {
            id: id.into(),
            vehicle_type,
            name: name.into(),
            capacity,
            cost_per_km,
            fuel_efficiency_km_per_l,
            co2_g_per_km,
            available: true,
        }
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Unique vehicle identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Vehicle class.
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Operating cost per kilometer, in currency units.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    /// Fuel efficiency in kilometers per liter.
    pub fn fuel_efficiency_km_per_l(&self) -> f64 {
        self.fuel_efficiency_km_per_l
    }

    /// CO₂ emission per kilometer, in grams.
    pub fn co2_g_per_km(&self) -> f64 {
        self.co2_g_per_km
    }

    /// Whether this vehicle can currently be dispatched.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Returns `true` if this vehicle can carry the given aggregate load.
    pub fn can_carry(&self, weight_kg: f64, volume_m3: f64) -> bool {
        self.capacity.weight_kg >= weight_kg && self.capacity.volume_m3 >= volume_m3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bike() -> Vehicle {
        Vehicle::new(
            "bike-1",
            VehicleType::Bike,
            "Delivery Bike",
            Capacity {
                weight_kg: 20.0,
                volume_m3: 0.5,
            },
            3.0,
            45.0,
            50.0,
        )
    }

    #[test]
    fn test_vehicle_new() {
        let v = bike();
        assert_eq!(v.id(), "bike-1");
        assert_eq!(v.vehicle_type(), VehicleType::Bike);
        assert_eq!(v.name(), "Delivery Bike");
        assert_eq!(v.cost_per_km(), 3.0);
        assert_eq!(v.fuel_efficiency_km_per_l(), 45.0);
        assert_eq!(v.co2_g_per_km(), 50.0);
        assert!(v.is_available());
    }

    #[test]
    fn test_vehicle_availability() {
        let v = bike().with_availability(false);
        assert!(!v.is_available());
    }

    #[test]
    fn test_can_carry_both_dimensions() {
        let v = bike();
        assert!(v.can_carry(20.0, 0.5));
        assert!(v.can_carry(0.0, 0.0));
        // Volume alone exceeding capacity rules the vehicle out.
        assert!(!v.can_carry(15.0, 0.8));
        assert!(!v.can_carry(25.0, 0.3));
    }

    #[test]
    fn test_vehicle_type_serde_lowercase() {
        let json = serde_json::to_string(&VehicleType::Tempo).expect("serialize");
        assert_eq!(json, "\"tempo\"");
    }
}
