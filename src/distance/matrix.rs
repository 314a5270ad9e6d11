//! Dense travel-distance matrix over the stops of a tour.

use crate::models::Location;

/// A dense n×n distance matrix stored in row-major order.
///
/// Index 0 is the depot; index `i + 1` is the i-th pickup of the input slice.
/// Distances are haversine kilometers, symmetric by construction.
///
/// # Examples
///
/// ```
/// use pickup_routing::distance::DistanceMatrix;
/// use pickup_routing::models::Location;
///
/// let depot = Location::depot("depot", "Hub", "OMR", 13.0827, 80.2707);
/// let pickups = vec![
///     Location::new("p1", "T. Nagar", "Pondy Bazaar", 13.0418, 80.2341, 15.0, 0.8),
/// ];
/// let dm = DistanceMatrix::from_stops(&depot, &pickups);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - depot.distance_to(&pickups[0])).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine distance matrix for a depot and its pickups.
    pub fn from_stops(depot: &Location, pickups: &[Location]) -> Self {
        let n = pickups.len() + 1;
        let mut dm = Self::new(n);
        let stop = |i: usize| if i == 0 { depot } else { &pickups[i - 1] };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stop(i).distance_to(stop(j));
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of stops in this matrix (pickups + depot).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stops() -> (Location, Vec<Location>) {
        let depot = Location::depot("depot", "Hub", "OMR", 13.0827, 80.2707);
        let pickups = vec![
            Location::new("p1", "T. Nagar", "Pondy Bazaar", 13.0418, 80.2341, 15.0, 0.8),
            Location::new("p2", "Adyar", "Adyar", 13.0067, 80.2206, 8.0, 0.5),
        ];
        (depot, pickups)
    }

    #[test]
    fn test_from_stops() {
        let (depot, pickups) = sample_stops();
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - depot.distance_to(&pickups[0])).abs() < 1e-10);
        assert!((dm.get(1, 2) - pickups[0].distance_to(&pickups[1])).abs() < 1e-10);
        assert!(dm.get(0, 0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let (depot, pickups) = sample_stops();
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_depot_only() {
        let (depot, _) = sample_stops();
        let dm = DistanceMatrix::from_stops(&depot, &[]);
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }
}
