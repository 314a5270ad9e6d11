//! Fleet and driver reference data.
//!
//! The optimizer takes its reference data as an explicitly constructed,
//! immutable [`FleetConfig`] value rather than reading module-level statics,
//! so synthetic fleets drop in trivially for tests and the engine carries no
//! hidden global state. The standard Chennai fleet and driver registry ship
//! as constructors for callers that want the stock configuration.

use crate::models::{Capacity, Driver, Location, Vehicle, VehicleType};

/// Immutable vehicle and driver registries injected into the optimizer.
///
/// The engine only reads this data; availability and status mutation belong
/// to the surrounding system. Because the config is never mutated here,
/// concurrent optimization calls can share one instance freely.
///
/// # Examples
///
/// ```
/// use pickup_routing::fleet::FleetConfig;
///
/// let config = FleetConfig::standard();
/// assert_eq!(config.vehicles().len(), 5);
/// assert_eq!(config.drivers().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FleetConfig {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
}

impl FleetConfig {
    /// Creates a config from explicit registries.
    pub fn new(vehicles: Vec<Vehicle>, drivers: Vec<Driver>) -> Self {
        Self { vehicles, drivers }
    }

    /// The standard fleet and driver registry.
    pub fn standard() -> Self {
        Self::new(standard_fleet(), standard_drivers())
    }

    /// Registered vehicles, in fleet order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Registered drivers, in registry order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }
}

/// The standard five-vehicle fleet with Indian logistics specifications.
pub fn standard_fleet() -> Vec<Vehicle> {
    vec![
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
        ),
        Vehicle::new(
            "auto-1",
            VehicleType::Auto,
            "Auto Rickshaw",
            Capacity {
                weight_kg: 50.0,
                volume_m3: 1.2,
            },
            8.0,
            25.0,
            80.0,
        ),
        Vehicle::new(
            "tempo-1",
            VehicleType::Tempo,
            "Tempo Traveller",
            Capacity {
                weight_kg: 500.0,
                volume_m3: 8.0,
            },
            15.0,
            12.0,
            180.0,
        ),
        Vehicle::new(
            "van-1",
            VehicleType::Van,
            "Cargo Van",
            Capacity {
                weight_kg: 300.0,
                volume_m3: 5.0,
            },
            12.0,
            15.0,
            150.0,
        ),
        Vehicle::new(
            "truck-1",
            VehicleType::Truck,
            "Pickup Truck",
            Capacity {
                weight_kg: 1000.0,
                volume_m3: 15.0,
            },
            25.0,
            8.0,
            300.0,
        ),
    ]
}

/// The standard driver registry.
pub fn standard_drivers() -> Vec<Driver> {
    vec![
        Driver::new(
            "driver-1",
            "Rajesh Kumar",
            "+91 98765 43210",
            4.8,
            13.0827,
            80.2707,
            "tempo-1",
        ),
        Driver::new(
            "driver-2",
            "Amit Singh",
            "+91 87654 32109",
            4.6,
            13.0878,
            80.2785,
            "van-1",
        ),
        Driver::new(
            "driver-3",
            "Suresh Reddy",
            "+91 76543 21098",
            4.9,
            13.0799,
            80.2743,
            "auto-1",
        ),
    ]
}

/// The standard depot: the logistics hub on OMR, Chennai.
pub fn standard_depot() -> Location {
    Location::depot("depot", "Logistics Hub", "OMR, Chennai", 13.0827, 80.2707)
}

/// Six sample pickup locations across Chennai, useful for demos and tests.
pub fn sample_pickups() -> Vec<Location> {
    use crate::models::{Priority, TimeWindow};

    vec![
        Location::new(
            "pickup-1",
            "T. Nagar Pickup",
            "Pondy Bazaar, T. Nagar, Chennai",
            13.0418,
            80.2341,
            15.0,
            0.8,
        )
        .with_priority(Priority::High)
        .with_time_window(TimeWindow::new("09:00", "12:00")),
        Location::new(
            "pickup-2",
            "Anna Nagar Collection",
            "Anna Nagar, Chennai",
            13.0850,
            80.2101,
            22.0,
            1.2,
        )
        .with_time_window(TimeWindow::new("10:00", "14:00")),
        Location::new(
            "pickup-3",
            "Adyar Donation Center",
            "Adyar, Chennai",
            13.0067,
            80.2206,
            8.0,
            0.5,
        )
        .with_priority(Priority::Low)
        .with_time_window(TimeWindow::new("11:00", "16:00")),
        Location::new(
            "pickup-4",
            "Velachery Hub",
            "Velachery, Chennai",
            12.9750,
            80.2230,
            18.0,
            1.0,
        )
        .with_priority(Priority::High)
        .with_time_window(TimeWindow::new("09:30", "13:00")),
        Location::new(
            "pickup-5",
            "Mylapore Station",
            "Mylapore, Chennai",
            13.0339,
            80.2619,
            12.0,
            0.7,
        )
        .with_time_window(TimeWindow::new("10:30", "15:00")),
        Location::new(
            "pickup-6",
            "Sholinganallur Tech Park",
            "Sholinganallur, Chennai",
            12.9000,
            80.2280,
            25.0,
            1.5,
        )
        .with_priority(Priority::High)
        .with_time_window(TimeWindow::new("08:00", "11:00")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fleet_shape() {
        let fleet = standard_fleet();
        assert_eq!(fleet.len(), 5);
        assert!(fleet.iter().all(|v| v.is_available()));
        let ids: Vec<&str> = fleet.iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["bike-1", "auto-1", "tempo-1", "van-1", "truck-1"]);
    }

    #[test]
    fn test_standard_drivers_cover_mid_fleet() {
        let drivers = standard_drivers();
        assert_eq!(drivers.len(), 3);
        let vehicles: Vec<&str> = drivers.iter().map(|d| d.vehicle_id()).collect();
        assert_eq!(vehicles, vec!["tempo-1", "van-1", "auto-1"]);
    }

    #[test]
    fn test_sample_pickups_have_load() {
        let pickups = sample_pickups();
        assert_eq!(pickups.len(), 6);
        let total_weight: f64 = pickups.iter().map(|p| p.weight_kg()).sum();
        let total_volume: f64 = pickups.iter().map(|p| p.volume_m3()).sum();
        assert!((total_weight - 100.0).abs() < 1e-10);
        assert!((total_volume - 5.7).abs() < 1e-10);
    }

    #[test]
    fn test_depot_carries_no_load() {
        let depot = standard_depot();
        assert_eq!(depot.weight_kg(), 0.0);
        assert_eq!(depot.volume_m3(), 0.0);
    }
}
