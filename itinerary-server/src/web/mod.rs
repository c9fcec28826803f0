//! Web layer for the itinerary planner.
//!
//! A thin JSON surface over the planner: parses and validates candidate
//! lists, enforces the candidate cap and serializes the timed itinerary.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
