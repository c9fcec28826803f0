//! Domain types for the itinerary planner.
//!
//! This module contains the core model: places, categories, transport
//! modes and the timed itinerary. Raw values are validated at construction
//! time, so code that receives these types can trust their validity.

mod category;
mod coordinate;
mod error;
mod itinerary;
mod mode;
mod poi;

pub use category::Category;
pub use coordinate::{Coordinate, EARTH_RADIUS_M};
pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryStop, Totals, format_distance, format_duration};
pub use mode::{ModeProfile, TransportMode};
pub use poi::{PointOfInterest, Rating};
