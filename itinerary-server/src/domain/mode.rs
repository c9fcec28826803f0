//! Transport modes and their speed profiles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the visitor moves between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    Walking,
    Cycling,
    Driving,
    PublicTransport,
}

/// Average speed and friction factor for a transport mode.
///
/// The efficiency factor inflates the raw distance/speed time to account for
/// intersections, stops and waiting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Average speed in km/h.
    pub speed_kmh: f64,
    /// Multiplier applied to raw travel time, at least 1.
    pub efficiency: f64,
}

impl ModeProfile {
    pub const fn new(speed_kmh: f64, efficiency: f64) -> Self {
        Self {
            speed_kmh,
            efficiency,
        }
    }
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Walking,
        TransportMode::Cycling,
        TransportMode::Driving,
        TransportMode::PublicTransport,
    ];

    /// Documented default speed profile for this mode.
    pub fn default_profile(self) -> ModeProfile {
        match self {
            TransportMode::Walking => ModeProfile::new(4.0, 1.3),
            TransportMode::Cycling => ModeProfile::new(15.0, 1.1),
            TransportMode::Driving => ModeProfile::new(25.0, 1.2),
            TransportMode::PublicTransport => ModeProfile::new(18.0, 1.4),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
            TransportMode::Driving => "driving",
            TransportMode::PublicTransport => "public-transport",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
