//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Category, Coordinate, DomainError, Itinerary, ItineraryStop, ModeProfile, PointOfInterest,
    Rating, TransportMode, format_distance, format_duration,
};

/// A candidate place as supplied by the search collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRequest {
    /// Stable identifier
    pub id: String,

    /// Display name
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,

    pub category: Category,

    /// Quality rating on a 0-5 scale
    pub rating: Option<f64>,
}

impl CandidateRequest {
    /// Validate into a domain point of interest.
    pub fn to_poi(&self) -> Result<PointOfInterest, DomainError> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)?;
        let poi = PointOfInterest::new(&self.id, &self.name, coordinate, self.category)?;
        match self.rating {
            Some(r) => Ok(poi.with_rating(Rating::new(r)?)),
            None => Ok(poi),
        }
    }
}

/// Request to plan an itinerary.
#[derive(Debug, Deserialize)]
pub struct PlanItineraryRequest {
    /// Where the day starts
    pub start: Coordinate,

    /// Time available for visits and travel, in minutes
    pub budget_mins: i64,

    pub mode: TransportMode,

    /// Departure from the start as "YYYY-MM-DDTHH:MM" (defaults to now)
    pub departure: Option<String>,

    pub candidates: Vec<CandidateRequest>,
}

/// A stop in the planned itinerary.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// 1-based position
    pub order: usize,

    pub id: String,
    pub name: String,
    pub category: Category,
    pub latitude: f64,
    pub longitude: f64,

    /// Arrival time (HH:MM)
    pub arrival: String,

    /// Departure time (HH:MM)
    pub departure: String,

    /// Time spent at the stop in minutes
    pub visit_mins: i64,

    /// Distance from the previous stop in meters
    pub distance_m: f64,

    /// Human-readable distance (e.g. "1.2 km")
    pub distance_text: String,

    /// Travel time from the previous stop in seconds
    pub travel_secs: i64,
}

impl StopResult {
    pub fn from_stop(stop: &ItineraryStop) -> Self {
        let poi = stop.poi();
        Self {
            order: stop.order(),
            id: poi.id().to_string(),
            name: poi.name().to_string(),
            category: poi.category(),
            latitude: poi.coordinate().latitude(),
            longitude: poi.coordinate().longitude(),
            arrival: stop.arrival().format("%H:%M").to_string(),
            departure: stop.departure().format("%H:%M").to_string(),
            visit_mins: stop.visit_duration().num_minutes(),
            distance_m: stop.distance_from_previous_m(),
            distance_text: format_distance(stop.distance_from_previous_m()),
            travel_secs: stop.travel_from_previous().num_seconds(),
        }
    }
}

/// Response for itinerary planning.
#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    /// Stops in visiting order
    pub stops: Vec<StopResult>,

    /// Sum of leg distances in meters
    pub total_distance_m: f64,

    /// Visits plus travel, in seconds
    pub total_duration_secs: i64,

    /// Travel only, in seconds
    pub total_travel_secs: i64,

    /// e.g. "4h 15m"
    pub total_duration_text: String,

    /// e.g. "2.3 km"
    pub total_distance_text: String,
}

impl PlanItineraryResponse {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            stops: itinerary.stops().iter().map(StopResult::from_stop).collect(),
            total_distance_m: itinerary.total_distance_m(),
            total_duration_secs: itinerary.total_duration().num_seconds(),
            total_travel_secs: itinerary.total_travel_time().num_seconds(),
            total_duration_text: format_duration(itinerary.total_duration()),
            total_distance_text: format_distance(itinerary.total_distance_m()),
        }
    }
}

/// Speed profile of one transport mode.
#[derive(Debug, Serialize)]
pub struct ModeResult {
    pub mode: TransportMode,
    pub speed_kmh: f64,
    pub efficiency: f64,
}

impl ModeResult {
    pub fn new(mode: TransportMode, profile: ModeProfile) -> Self {
        Self {
            mode,
            speed_kmh: profile.speed_kmh,
            efficiency: profile.efficiency,
        }
    }
}

/// Response listing transport modes.
#[derive(Debug, Serialize)]
pub struct ModesResponse {
    pub modes: Vec<ModeResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
