//! Timed itinerary types.
//!
//! An `Itinerary` is the final product of a planning run: an ordered list of
//! stops, each stamped with arrival and departure times, plus the aggregate
//! totals.

use chrono::{Duration, NaiveDateTime};

use super::PointOfInterest;

/// A point of interest placed on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryStop {
    poi: PointOfInterest,
    order: usize,
    distance_from_previous_m: f64,
    travel_from_previous: Duration,
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
}

impl ItineraryStop {
    pub(crate) fn new(
        poi: PointOfInterest,
        order: usize,
        distance_from_previous_m: f64,
        travel_from_previous: Duration,
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
    ) -> Self {
        Self {
            poi,
            order,
            distance_from_previous_m,
            travel_from_previous,
            arrival,
            departure,
        }
    }

    pub fn poi(&self) -> &PointOfInterest {
        &self.poi
    }

    /// 1-based position in the itinerary.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Distance from the previous stop (or the start) in meters.
    pub fn distance_from_previous_m(&self) -> f64 {
        self.distance_from_previous_m
    }

    /// Travel time from the previous stop (or the start).
    pub fn travel_from_previous(&self) -> Duration {
        self.travel_from_previous
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Time spent at the stop itself.
    pub fn visit_duration(&self) -> Duration {
        self.departure - self.arrival
    }
}

/// Aggregate metrics over a timed sequence of stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of leg distances in meters.
    pub distance_m: f64,
    /// Visits plus travel.
    pub duration: Duration,
    /// Travel only.
    pub travel_time: Duration,
}

impl Totals {
    /// Sum the per-stop fields.
    pub fn aggregate(stops: &[ItineraryStop]) -> Self {
        let distance_m = stops.iter().map(|s| s.distance_from_previous_m).sum();
        let travel_time = stops
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.travel_from_previous);
        let visits = stops
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.visit_duration());

        Self {
            distance_m,
            duration: travel_time + visits,
            travel_time,
        }
    }
}

/// A complete single-day plan.
///
/// # Invariants
///
/// - Stop order indices run 1, 2, 3, ...
/// - Each stop arrives exactly one travel leg after the previous departure
/// - No category appears twice
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    stops: Vec<ItineraryStop>,
    totals: Totals,
}

impl Itinerary {
    /// Wrap timed stops, computing the totals.
    pub fn new(stops: Vec<ItineraryStop>) -> Self {
        let totals = Totals::aggregate(&stops);
        Self { stops, totals }
    }

    /// An itinerary with no stops.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn stops(&self) -> &[ItineraryStop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn total_distance_m(&self) -> f64 {
        self.totals.distance_m
    }

    pub fn total_duration(&self) -> Duration {
        self.totals.duration
    }

    pub fn total_travel_time(&self) -> Duration {
        self.totals.travel_time
    }
}

/// Format a duration as "2h 05m", or "45m" when under an hour.
pub fn format_duration(duration: Duration) -> String {
    let total_mins = duration.num_minutes().max(0);
    let (hours, mins) = (total_mins / 60, total_mins % 60);
    if hours > 0 {
        format!("{hours}h {mins:02}m")
    } else {
        format!("{mins}m")
    }
}

/// Format a distance as "850 m", or "1.2 km" from one kilometer up.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters.max(0.0))
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}
