//! Point-of-interest categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of activity a point of interest offers.
///
/// The set is closed: adding a category means adding a variant here, and the
/// compiler then points at every table that needs an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Restaurant,
    Cafe,
    Museum,
    Gallery,
    Park,
    Landmark,
    Shopping,
    Theater,
    Zoo,
    Beach,
    Nightlife,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 12] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Museum,
        Category::Gallery,
        Category::Park,
        Category::Landmark,
        Category::Shopping,
        Category::Theater,
        Category::Zoo,
        Category::Beach,
        Category::Nightlife,
        Category::Other,
    ];

    /// Recommended visit length in minutes, if this category has one.
    ///
    /// `None` means the caller should fall back to its default.
    pub fn recommended_visit_mins(self) -> Option<i64> {
        match self {
            Category::Restaurant => Some(90),
            Category::Cafe => Some(45),
            Category::Museum => Some(120),
            Category::Gallery => Some(75),
            Category::Park => Some(60),
            Category::Landmark => Some(30),
            Category::Shopping => Some(60),
            Category::Theater => Some(150),
            Category::Zoo => Some(180),
            Category::Beach => Some(120),
            Category::Nightlife => Some(120),
            Category::Other => None,
        }
    }

    /// Returns the wire name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Cafe => "cafe",
            Category::Museum => "museum",
            Category::Gallery => "gallery",
            Category::Park => "park",
            Category::Landmark => "landmark",
            Category::Shopping => "shopping",
            Category::Theater => "theater",
            Category::Zoo => "zoo",
            Category::Beach => "beach",
            Category::Nightlife => "nightlife",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
