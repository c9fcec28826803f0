//! Points of interest supplied by the candidate search.

use super::{Category, Coordinate, DomainError};

/// A quality rating on the 0-5 scale.
///
/// Any `Rating` value is finite and in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub const MAX: f64 = 5.0;

    /// Create a rating, rejecting values outside 0-5.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A visitable place.
///
/// Immutable once built; the planner only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfInterest {
    id: String,
    name: String,
    coordinate: Coordinate,
    category: Category,
    rating: Option<Rating>,
}

impl PointOfInterest {
    /// Create an unrated point of interest.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyName`] if `name` is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinate: Coordinate,
        category: Category,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName(id));
        }

        Ok(Self {
            id,
            name,
            coordinate,
            category,
            rating: None,
        })
    }

    /// Attach a rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Rating used for comparisons; unrated places count as 0.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.map_or(0.0, |r| r.value())
    }
}
