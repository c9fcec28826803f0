//! Itinerary planner.
//!
//! This module implements the core planning pipeline that answers:
//! "Given these places and this much time, what should I visit, and when?"
//!
//! Candidates go through a budget-constrained category selection, a
//! nearest-neighbor ordering, and a timeline pass that stamps arrival and
//! departure times on every stop.

mod config;
mod estimate;
mod plan;
mod select;
mod sequence;
mod timeline;

#[cfg(test)]
mod select_tests;

pub use config::{ConfigError, ModeProfiles, PlannerConfig};
pub use estimate::{DurationEstimator, TravelEstimate, TravelTimeEstimator};
pub use plan::{PlanRequest, Planner};
pub use select::{CategoryMixSelector, PlanError};
pub use sequence::sequence;
pub use timeline::ItineraryTimeline;
