//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{Planner, PlannerConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary planner built from `config`
    pub planner: Arc<Planner>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            planner: Arc::new(Planner::new(&config)),
            config: Arc::new(config),
        }
    }
}
