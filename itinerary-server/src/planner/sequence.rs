//! Nearest-neighbor route ordering.
//!
//! Orders an unordered set of places into a visiting sequence by always moving
//! to the closest unvisited place. This is a greedy approximation, O(n²), and
//! can produce tours noticeably longer than optimal on adversarial layouts.

use tracing::trace;

use crate::domain::{Coordinate, PointOfInterest};

/// Order `pois` into a route starting from `start`.
///
/// The result is a permutation of the input. When two candidates are
/// equidistant from the current position, the one earlier in the input wins,
/// so the output is fully determined by the input order.
pub fn sequence<'a>(pois: &[&'a PointOfInterest], start: Coordinate) -> Vec<&'a PointOfInterest> {
    let mut unvisited: Vec<&'a PointOfInterest> = pois.to_vec();
    let mut route = Vec::with_capacity(unvisited.len());
    let mut current = start;

    while !unvisited.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_dist = f64::INFINITY;

        for (idx, poi) in unvisited.iter().enumerate() {
            let dist = current.distance_meters(&poi.coordinate());
            // Strict comparison keeps the earliest of equidistant candidates
            if dist < nearest_dist {
                nearest_idx = idx;
                nearest_dist = dist;
            }
        }

        let next = unvisited.remove(nearest_idx);
        trace!(poi = next.id(), distance_m = nearest_dist, "Sequenced stop");
        current = next.coordinate();
        route.push(next);
    }

    route
}
