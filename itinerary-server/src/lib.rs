//! Single-day itinerary planner server.
//!
//! Answers: "Given these places, this much time and this way of getting
//! around, what should I visit, in which order, and when?"

pub mod domain;
pub mod planner;
pub mod web;
