//! Domain error types.
//!
//! These errors represent validation failures for raw values handed to us by
//! the candidate-search collaborator. They are distinct from planning errors.

/// Domain-level errors for validation at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Rating is outside the 0-5 scale or not a finite number
    #[error("invalid rating {0}: must be between 0 and 5")]
    InvalidRating(f64),

    /// Latitude or longitude is out of range or not finite
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Point of interest has a blank display name
    #[error("point of interest {0} has an empty name")]
    EmptyName(String),
}
