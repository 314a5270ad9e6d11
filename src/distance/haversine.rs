//! Great-circle distance on the WGS-84 sphere approximation.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometers.
///
/// Total and pure: never fails, `haversine_km(a, a) == 0`, and the result is
/// symmetric in its two endpoints.
///
/// # Examples
///
/// ```
/// use pickup_routing::distance::haversine_km;
///
/// // Chennai depot to T. Nagar, roughly 6.4 km.
/// let d = haversine_km(13.0827, 80.2707, 13.0418, 80.2341);
/// assert!(d > 5.5 && d < 7.0);
/// assert!(haversine_km(13.0827, 80.2707, 13.0827, 80.2707).abs() < 1e-10);
/// ```
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
