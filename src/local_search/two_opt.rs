//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `(i, j)` with `1 <= i < n - 2`, `j > i`, and
//! `j - i > 1`, compute the change in the pickup-sequence distance from
//! reversing the segment `[i..=j]`:
//!
//! ```text
//! delta = d(r[i-1], r[j]) - d(r[i-1], r[i])          // entry edge
//!       + d(r[i], r[j+1]) - d(r[j], r[j+1])          // exit edge, if any
//! ```
//!
//! If delta is strictly negative, reverse the segment and accept the
//! improvement. Full passes repeat until one finds nothing (first-improvement
//! strategy). The comparison metric is the open pickup sequence; the depot
//! legs are not part of it, so position 0 of the route is never displaced.
//!
//! # Complexity
//!
//! O(n²) per pass; a pass cap can bound the total work for large stop counts.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt improvement to a visiting order (matrix indices, depot = 0
/// excluded from the sequence).
///
/// Only strictly improving reversals are taken, so the result is
/// deterministic and its pickup-sequence distance never exceeds the input's.
/// The loop runs to a local optimum, or stops after `max_passes` full passes
/// when a cap is given, returning the best order found so far.
///
/// # Examples
///
/// ```
/// use pickup_routing::distance::DistanceMatrix;
/// use pickup_routing::local_search::{route_distance, two_opt_improve};
/// use pickup_routing::models::Location;
///
/// let depot = Location::depot("depot", "Hub", "-", 0.0, 0.0);
/// let pickups = vec![
///     Location::new("p1", "P1", "-", 0.01, 0.0, 1.0, 0.1),
///     Location::new("p2", "P2", "-", 0.02, 0.0, 1.0, 0.1),
///     Location::new("p3", "P3", "-", 0.03, 0.0, 1.0, 0.1),
///     Location::new("p4", "P4", "-", 0.04, 0.0, 1.0, 0.1),
/// ];
/// let dm = DistanceMatrix::from_stops(&depot, &pickups);
///
/// // Out-of-order tour: 1, 4, 3, 2 — 2-opt untangles it to 1, 2, 3, 4.
/// let improved = two_opt_improve(&[1, 4, 3, 2], &dm, None);
/// assert_eq!(improved, vec![1, 2, 3, 4]);
/// assert!(route_distance(&improved, &dm) <= route_distance(&[1, 4, 3, 2], &dm) + 1e-10);
/// ```
pub fn two_opt_improve(
    route: &[usize],
    distances: &DistanceMatrix,
    max_passes: Option<usize>,
) -> Vec<usize> {
    // No reversible pair (i, j) with j - i > 1 exists below four stops.
    if route.len() < 4 {
        return route.to_vec();
    }

    let mut current = route.to_vec();
    let n = current.len();
    let mut passes = 0;
    let mut improved = true;

    while improved && max_passes.map_or(true, |cap| passes < cap) {
        improved = false;

        for i in 1..n - 2 {
            for j in (i + 2)..n {
                let delta = reversal_delta(&current, distances, i, j);
                if delta < -IMPROVEMENT_EPS {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }

        passes += 1;
    }

    current
}

/// Change in the pickup-sequence distance from reversing `[i..=j]`.
///
/// Requires `i >= 1`; the edge into position `i` always exists, the edge out
/// of position `j` only when `j` is not the last stop.
fn reversal_delta(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let prev = route[i - 1];
    let mut delta = distances.get(prev, route[j]) - distances.get(prev, route[i]);
    if j + 1 < route.len() {
        let next = route[j + 1];
        delta += distances.get(route[i], next) - distances.get(route[j], next);
    }
    delta
}

/// Total closed-tour distance: `depot → route[0] → ... → route[n-1] → depot`.
pub fn route_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut dist = distances.get(0, route[0]);
    for pair in route.windows(2) {
        dist += distances.get(pair[0], pair[1]);
    }
    dist += distances.get(route[route.len() - 1], 0);
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;
    use crate::models::Location;
    use proptest::prelude::*;

    // Distance of the open pickup sequence, the metric 2-opt improves against.
    fn sequence_distance(route: &[usize], distances: &DistanceMatrix) -> f64 {
        route
            .windows(2)
            .map(|pair| distances.get(pair[0], pair[1]))
            .sum()
    }

    fn stops(coords: &[(f64, f64)]) -> (Location, Vec<Location>) {
        let depot = Location::depot("depot", "Hub", "-", 0.0, 0.0);
        let pickups = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng))| Location::new(format!("p{i}"), "P", "-", lat, lng, 1.0, 0.1))
            .collect();
        (depot, pickups)
    }

    #[test]
    fn test_2opt_already_optimal() {
        let (depot, pickups) = stops(&[(0.01, 0.0), (0.02, 0.0), (0.03, 0.0), (0.04, 0.0)]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        assert_eq!(two_opt_improve(&[1, 2, 3, 4], &dm, None), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_2opt_reverses_backward_segment() {
        let (depot, pickups) = stops(&[(0.01, 0.0), (0.02, 0.0), (0.03, 0.0), (0.04, 0.0)]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        let tangled = vec![1, 4, 3, 2];
        let improved = two_opt_improve(&tangled, &dm, None);
        assert!(sequence_distance(&improved, &dm) <= sequence_distance(&tangled, &dm) + 1e-10);
        assert_eq!(improved, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_2opt_short_routes_unchanged() {
        let (depot, pickups) = stops(&[(0.01, 0.0), (0.02, 0.0), (0.03, 0.0)]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        assert!(two_opt_improve(&[], &dm, None).is_empty());
        assert_eq!(two_opt_improve(&[2], &dm, None), vec![2]);
        assert_eq!(two_opt_improve(&[3, 1, 2], &dm, None), vec![3, 1, 2]);
    }

    #[test]
    fn test_2opt_pass_cap_zero_is_identity() {
        let (depot, pickups) = stops(&[(0.01, 0.0), (0.02, 0.0), (0.03, 0.0), (0.04, 0.0)]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        // An improving reversal exists, but a zero-pass cap returns the input.
        assert_eq!(two_opt_improve(&[1, 4, 3, 2], &dm, Some(0)), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_2opt_deterministic() {
        let (depot, pickups) = stops(&[
            (0.03, 0.01),
            (0.01, 0.04),
            (0.05, 0.02),
            (0.02, 0.02),
            (0.04, 0.05),
        ]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        let a = two_opt_improve(&[1, 2, 3, 4, 5], &dm, None);
        let b = two_opt_improve(&[1, 2, 3, 4, 5], &dm, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_route_distance_closed_tour() {
        let (depot, pickups) = stops(&[(0.01, 0.0), (0.02, 0.0)]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        let expected = dm.get(0, 1) + dm.get(1, 2) + dm.get(2, 0);
        assert!((route_distance(&[1, 2], &dm) - expected).abs() < 1e-10);
        assert_eq!(route_distance(&[], &dm), 0.0);
    }

    // A local optimum admits no further strictly improving reversal among
    // the considered pairs, so a second run is a no-op.
    #[test]
    fn test_2opt_fixed_point() {
        let (depot, pickups) = stops(&[
            (0.08, 0.01),
            (0.02, 0.07),
            (0.09, 0.06),
            (0.01, 0.02),
            (0.05, 0.09),
            (0.07, 0.03),
        ]);
        let dm = DistanceMatrix::from_stops(&depot, &pickups);
        let first = two_opt_improve(&[1, 2, 3, 4, 5, 6], &dm, None);
        let second = two_opt_improve(&first, &dm, None);
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_2opt_never_worsens_and_permutes(
            coords in prop::collection::vec((-0.5f64..0.5, -0.5f64..0.5), 4..10)
        ) {
            let (depot, pickups) = stops(&coords);
            let dm = DistanceMatrix::from_stops(&depot, &pickups);
            let initial = nearest_neighbor(&dm);
            let improved = two_opt_improve(&initial, &dm, None);

            prop_assert!(
                sequence_distance(&improved, &dm)
                    <= sequence_distance(&initial, &dm) + 1e-10
            );

            let mut sorted = improved.clone();
            sorted.sort_unstable();
            let expected: Vec<usize> = (1..=pickups.len()).collect();
            prop_assert_eq!(sorted, expected);
        }
    }
}
