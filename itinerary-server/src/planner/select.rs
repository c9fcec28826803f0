//! Budget-constrained category mix selection.
//!
//! Chooses which places make it into the day. The selector favors one
//! representative per category, fills leftover time opportunistically, and
//! never returns a route whose visits plus travel exceed the budget.

use std::collections::{HashMap, HashSet};

use chrono::Duration;
use tracing::debug;

use crate::domain::{Category, Coordinate, PointOfInterest, TransportMode};

use super::estimate::{DurationEstimator, TravelTimeEstimator};
use super::sequence::sequence;

/// Error from itinerary planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Budget is zero or negative
    #[error("invalid budget: {seconds}s (must be positive)")]
    InvalidBudget { seconds: i64 },
}

/// Selects and orders places under a time budget.
///
/// Selection runs in four phases:
///
/// 1. Pick the best candidate of each category (in order of first
///    appearance) and provisionally accept it if it fits.
/// 2. Sequence the accepted set and recompute the real elapsed time from
///    that route.
/// 3. Fill the remaining time from categories not yet used, best
///    `rating - km` score first.
/// 4. Sequence everything once more for the final order.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMixSelector<'a> {
    durations: &'a DurationEstimator,
    travel: &'a TravelTimeEstimator,
    rating_tolerance: f64,
}

impl<'a> CategoryMixSelector<'a> {
    pub fn new(
        durations: &'a DurationEstimator,
        travel: &'a TravelTimeEstimator,
        rating_tolerance: f64,
    ) -> Self {
        Self {
            durations,
            travel,
            rating_tolerance,
        }
    }

    /// Select an ordered route from `candidates`.
    ///
    /// Returns an empty route if nothing fits.
    ///
    /// # Errors
    ///
    /// [`PlanError::InvalidBudget`] if `budget` is not positive. No selection
    /// work is done in that case.
    pub fn select<'p>(
        &self,
        candidates: &'p [PointOfInterest],
        start: Coordinate,
        budget: Duration,
        mode: TransportMode,
    ) -> Result<Vec<&'p PointOfInterest>, PlanError> {
        if budget <= Duration::zero() {
            return Err(PlanError::InvalidBudget {
                seconds: budget.num_seconds(),
            });
        }

        let mut used: HashSet<Category> = HashSet::new();

        // Phase 1: one representative per category
        let mut accepted: Vec<&'p PointOfInterest> = Vec::new();
        let mut elapsed = Duration::zero();
        let mut last = start;

        for best in self.representatives(candidates, start) {
            let cost = self.stop_cost(&last, best, mode);
            if elapsed + cost <= budget {
                elapsed = elapsed + cost;
                last = best.coordinate();
                used.insert(best.category());
                accepted.push(best);
            } else {
                debug!(
                    poi = best.id(),
                    category = %best.category(),
                    cost_secs = cost.num_seconds(),
                    "Representative does not fit, category stays open"
                );
            }
        }

        // Phase 2: the provisional elapsed time above followed acceptance
        // order; the budget left over is measured on the sequenced route.
        let sequenced = sequence(&accepted, start);
        let mut route = self.fitting_order(sequenced, accepted, start, budget, mode);
        let mut remaining = budget - self.route_elapsed(&route, start, mode);

        debug!(
            accepted = route.len(),
            remaining_secs = remaining.num_seconds(),
            "Category representatives sequenced"
        );

        // Phase 3: opportunistic fill from unused categories
        let mut end = route.last().map_or(start, |p| p.coordinate());
        let mut pool: Vec<(&'p PointOfInterest, f64)> = candidates
            .iter()
            .filter(|p| !used.contains(&p.category()))
            .map(|p| (p, p.rating_or_zero() - end.distance_km(&p.coordinate())))
            .collect();
        // Stable: equal scores keep input order
        pool.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (poi, score) in pool {
            if used.contains(&poi.category()) {
                continue;
            }
            let cost = self.stop_cost(&end, poi, mode);
            if cost <= remaining {
                debug!(
                    poi = poi.id(),
                    score,
                    cost_secs = cost.num_seconds(),
                    "Filled spare time"
                );
                remaining = remaining - cost;
                end = poi.coordinate();
                used.insert(poi.category());
                route.push(poi);
            }
        }

        // Phase 4: final ordering
        let sequenced = sequence(&route, start);
        let final_route = self.fitting_order(sequenced, route, start, budget, mode);

        debug!(
            stops = final_route.len(),
            elapsed_secs = self.route_elapsed(&final_route, start, mode).num_seconds(),
            budget_secs = budget.num_seconds(),
            "Selection complete"
        );

        Ok(final_route)
    }

    /// Best candidate of each category, in order of first appearance.
    fn representatives<'p>(
        &self,
        candidates: &'p [PointOfInterest],
        start: Coordinate,
    ) -> Vec<&'p PointOfInterest> {
        let mut slots: HashMap<Category, usize> = HashMap::new();
        let mut best: Vec<&'p PointOfInterest> = Vec::new();

        for poi in candidates {
            match slots.get(&poi.category()) {
                Some(&idx) => {
                    if self.prefers(poi, best[idx], &start) {
                        best[idx] = poi;
                    }
                }
                None => {
                    slots.insert(poi.category(), best.len());
                    best.push(poi);
                }
            }
        }

        best
    }

    /// Whether `challenger` should replace `incumbent` as a category's pick.
    ///
    /// Higher rating wins, unless the ratings are within the tolerance, in
    /// which case the one closer to `start` wins.
    fn prefers(
        &self,
        challenger: &PointOfInterest,
        incumbent: &PointOfInterest,
        start: &Coordinate,
    ) -> bool {
        let (a, b) = (challenger.rating_or_zero(), incumbent.rating_or_zero());
        if (a - b).abs() < self.rating_tolerance {
            start.distance_meters(&challenger.coordinate())
                < start.distance_meters(&incumbent.coordinate())
        } else {
            a > b
        }
    }

    /// Travel from `from` to `poi` plus the visit itself.
    fn stop_cost(&self, from: &Coordinate, poi: &PointOfInterest, mode: TransportMode) -> Duration {
        self.travel.travel(from, &poi.coordinate(), mode).duration
            + self.durations.visit_duration(poi.category())
    }

    /// Total visit and travel time of walking `route` from `start`.
    pub fn route_elapsed(
        &self,
        route: &[&PointOfInterest],
        start: Coordinate,
        mode: TransportMode,
    ) -> Duration {
        let mut here = start;
        let mut elapsed = Duration::zero();
        for poi in route {
            elapsed = elapsed + self.stop_cost(&here, poi, mode);
            here = poi.coordinate();
        }
        elapsed
    }

    /// Keep the nearest-neighbor order unless it overruns the budget.
    ///
    /// Resequencing can lengthen a route that fit in its construction order;
    /// `fallback` is always a route already known to fit.
    fn fitting_order<'p>(
        &self,
        sequenced: Vec<&'p PointOfInterest>,
        fallback: Vec<&'p PointOfInterest>,
        start: Coordinate,
        budget: Duration,
        mode: TransportMode,
    ) -> Vec<&'p PointOfInterest> {
        if self.route_elapsed(&sequenced, start, mode) <= budget {
            sequenced
        } else {
            debug!(
                stops = fallback.len(),
                "Sequenced route overruns budget, keeping construction order"
            );
            fallback
        }
    }
}
