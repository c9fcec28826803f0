//! Planner configuration.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::{ModeProfile, TransportMode};

/// Error loading or validating a [`PlannerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but makes no sense
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Speed profiles for every transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeProfiles {
    pub walking: ModeProfile,
    pub cycling: ModeProfile,
    pub driving: ModeProfile,
    pub public_transport: ModeProfile,
}

impl ModeProfiles {
    /// Profile for the given mode.
    pub fn get(&self, mode: TransportMode) -> ModeProfile {
        match mode {
            TransportMode::Walking => self.walking,
            TransportMode::Cycling => self.cycling,
            TransportMode::Driving => self.driving,
            TransportMode::PublicTransport => self.public_transport,
        }
    }
}

impl Default for ModeProfiles {
    fn default() -> Self {
        Self {
            walking: TransportMode::Walking.default_profile(),
            cycling: TransportMode::Cycling.default_profile(),
            driving: TransportMode::Driving.default_profile(),
            public_transport: TransportMode::PublicTransport.default_profile(),
        }
    }
}

/// Configuration parameters for itinerary planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Ratings closer than this are treated as equal when picking the
    /// representative of a category; proximity decides instead.
    pub rating_tolerance: f64,

    /// Largest candidate list a caller may hand to the planner.
    /// Bounds the quadratic sequencing cost.
    pub max_candidates: usize,

    /// Visit length for categories without their own entry (minutes).
    pub default_visit_mins: i64,

    /// Per-mode speed and efficiency factor.
    pub modes: ModeProfiles,
}

impl PlannerConfig {
    /// A visit can take at most a whole day.
    pub const MAX_VISIT_MINS: i64 = 24 * 60;

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values. The result is validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make planning meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rating_tolerance.is_finite() || self.rating_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rating_tolerance must be non-negative, got {}",
                self.rating_tolerance
            )));
        }

        if self.max_candidates == 0 {
            return Err(ConfigError::Invalid(
                "max_candidates must be at least 1".to_string(),
            ));
        }

        if self.default_visit_mins <= 0 || self.default_visit_mins > Self::MAX_VISIT_MINS {
            return Err(ConfigError::Invalid(format!(
                "default_visit_mins must be between 1 and {}, got {}",
                Self::MAX_VISIT_MINS,
                self.default_visit_mins
            )));
        }

        for mode in TransportMode::ALL {
            let profile = self.modes.get(mode);
            if !profile.speed_kmh.is_finite() || profile.speed_kmh <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{mode} speed must be positive, got {}",
                    profile.speed_kmh
                )));
            }
            if !profile.efficiency.is_finite() || profile.efficiency < 1.0 {
                return Err(ConfigError::Invalid(format!(
                    "{mode} efficiency must be at least 1, got {}",
                    profile.efficiency
                )));
            }
        }

        Ok(())
    }

    /// Returns the default visit length as a Duration.
    pub fn default_visit(&self) -> Duration {
        Duration::minutes(self.default_visit_mins)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            rating_tolerance: 0.5,
            max_candidates: 300,
            default_visit_mins: 90,
            modes: ModeProfiles::default(),
        }
    }
}
