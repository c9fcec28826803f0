//! End-to-end planning: select, sequence, stamp, total.

use chrono::{Duration, NaiveDateTime};
use tracing::debug;

use crate::domain::{Coordinate, Itinerary, PointOfInterest, TransportMode};

use super::config::PlannerConfig;
use super::estimate::{DurationEstimator, TravelTimeEstimator};
use super::select::{CategoryMixSelector, PlanError};
use super::timeline::ItineraryTimeline;

/// Request for a single-day plan.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Candidate places, already geocoded and categorized.
    pub candidates: Vec<PointOfInterest>,

    /// Where the day starts.
    pub start: Coordinate,

    /// Time available for visits plus travel.
    pub budget: Duration,

    pub mode: TransportMode,

    /// When the visitor leaves `start`.
    pub departure: NaiveDateTime,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(
        candidates: Vec<PointOfInterest>,
        start: Coordinate,
        budget: Duration,
        mode: TransportMode,
        departure: NaiveDateTime,
    ) -> Self {
        Self {
            candidates,
            start,
            budget,
            mode,
            departure,
        }
    }
}

/// Itinerary planner.
///
/// Holds no per-request state, so one planner can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Planner {
    durations: DurationEstimator,
    travel: TravelTimeEstimator,
    rating_tolerance: f64,
}

impl Planner {
    /// Create a planner from configuration.
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            durations: DurationEstimator::from_config(config),
            travel: TravelTimeEstimator::from_config(config),
            rating_tolerance: config.rating_tolerance,
        }
    }

    /// Plan a timed itinerary.
    ///
    /// A budget too small for any candidate yields an empty itinerary.
    pub fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        let selector =
            CategoryMixSelector::new(&self.durations, &self.travel, self.rating_tolerance);
        let route = selector.select(
            &request.candidates,
            request.start,
            request.budget,
            request.mode,
        )?;

        let stops = ItineraryTimeline::new(&self.durations, &self.travel).stamp(
            &route,
            request.start,
            request.mode,
            request.departure,
        );
        let itinerary = Itinerary::new(stops);

        debug!(
            candidates = request.candidates.len(),
            stops = itinerary.len(),
            total_secs = itinerary.total_duration().num_seconds(),
            distance_m = itinerary.total_distance_m(),
            "Planned itinerary"
        );

        Ok(itinerary)
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(&PlannerConfig::default())
    }
}
