//! Visit-duration and travel-time estimates.
//!
//! Both estimators are pure lookups/arithmetic: no routing engine, no live
//! traffic. Travel time is straight-line distance at a fixed average speed,
//! inflated by a per-mode efficiency factor.

use chrono::Duration;

use crate::domain::{Category, Coordinate, TransportMode};

use super::config::{ModeProfiles, PlannerConfig};

/// Maps a category to how long a visitor typically stays.
#[derive(Debug, Clone, Copy)]
pub struct DurationEstimator {
    fallback: Duration,
}

impl DurationEstimator {
    /// Visit length used when a category has no entry of its own.
    pub const DEFAULT_VISIT_MINS: i64 = 90;

    pub fn new(fallback: Duration) -> Self {
        Self { fallback }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.default_visit())
    }

    /// Recommended visit duration for `category`.
    pub fn visit_duration(&self, category: Category) -> Duration {
        category
            .recommended_visit_mins()
            .map_or(self.fallback, Duration::minutes)
    }
}

impl Default for DurationEstimator {
    fn default() -> Self {
        Self::new(Duration::minutes(Self::DEFAULT_VISIT_MINS))
    }
}

/// Distance and time for one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelEstimate {
    /// Great-circle distance in meters.
    pub distance_m: f64,
    /// Estimated travel time, rounded to whole seconds.
    pub duration: Duration,
}

/// Estimates travel between two coordinates for a transport mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelTimeEstimator {
    profiles: ModeProfiles,
}

impl TravelTimeEstimator {
    pub fn new(profiles: ModeProfiles) -> Self {
        Self { profiles }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.modes)
    }

    /// Estimate the leg from `from` to `to`.
    pub fn travel(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        mode: TransportMode,
    ) -> TravelEstimate {
        let distance_m = from.distance_meters(to);
        let profile = self.profiles.get(mode);

        let hours = (distance_m / 1000.0) / profile.speed_kmh;
        let seconds = hours * 3600.0 * profile.efficiency;

        TravelEstimate {
            distance_m,
            duration: Duration::seconds(seconds.round() as i64),
        }
    }
}
