//! Schedule propagation along an ordered route.

use chrono::NaiveDateTime;

use crate::domain::{Coordinate, ItineraryStop, PointOfInterest, TransportMode};

use super::estimate::{DurationEstimator, TravelTimeEstimator};

/// Stamps an ordered route with arrival and departure times.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryTimeline<'a> {
    durations: &'a DurationEstimator,
    travel: &'a TravelTimeEstimator,
}

impl<'a> ItineraryTimeline<'a> {
    pub fn new(durations: &'a DurationEstimator, travel: &'a TravelTimeEstimator) -> Self {
        Self { durations, travel }
    }

    /// Walk `route` once, leaving `start` at `departure`.
    ///
    /// Each stop arrives one travel leg after the previous departure (or after
    /// `departure` for the first stop) and leaves after its visit duration.
    pub fn stamp(
        &self,
        route: &[&PointOfInterest],
        start: Coordinate,
        mode: TransportMode,
        departure: NaiveDateTime,
    ) -> Vec<ItineraryStop> {
        let mut stops = Vec::with_capacity(route.len());
        let mut here = start;
        let mut clock = departure;

        for (idx, poi) in route.iter().enumerate() {
            let leg = self.travel.travel(&here, &poi.coordinate(), mode);
            let arrival = clock + leg.duration;
            let leave = arrival + self.durations.visit_duration(poi.category());

            stops.push(ItineraryStop::new(
                (*poi).clone(),
                idx + 1,
                leg.distance_m,
                leg.duration,
                arrival,
                leave,
            ));

            here = poi.coordinate();
            clock = leave;
        }

        stops
    }
}
