//! Core domain types for kover.
//!
//! This module contains the scene elements:
//! - `Building` - axis-aligned rectangles given by center and half-extents
//! - `Antenna` - coverage circles given by position and radius
//! - `ElementKind` - which of the two an identifier or line refers to

mod antenna;
mod building;

use std::fmt;

pub use antenna::Antenna;
pub use building::Building;

/// The two kinds of element a scene can hold.
///
/// Building and antenna identifiers live in separate namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Building,
    Antenna,
}

impl ElementKind {
    /// Keyword that starts a line of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            ElementKind::Building => "building",
            ElementKind::Antenna => "antenna",
        }
    }

    /// Parse a line keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "building" => Some(ElementKind::Building),
            "antenna" => Some(ElementKind::Antenna),
            _ => None,
        }
    }

    /// Number of arguments expected after the keyword.
    pub fn arity(self) -> usize {
        match self {
            ElementKind::Building => 5,
            ElementKind::Antenna => 4,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Axis-aligned extent of an element, in scene coordinates.
///
/// Computed in `i64` so that `x ± w` never overflows for `i32` inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub left: i64,
    pub right: i64,
    pub bottom: i64,
    pub top: i64,
}

impl Extent {
    /// Extent of a box centered on (x, y) with half-sizes (dx, dy).
    pub fn around(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        let (x, y, dx, dy) = (x as i64, y as i64, dx as i64, dy as i64);
        Self {
            left: x - dx,
            right: x + dx,
            bottom: y - dy,
            top: y + dy,
        }
    }

    /// Whether two extents share interior area.
    ///
    /// Closed edges touching is not an overlap.
    pub fn overlaps(&self, other: &Extent) -> bool {
        !(self.right <= other.left
            || self.left >= other.right
            || self.top <= other.bottom
            || self.bottom >= other.top)
    }

    /// Smallest extent covering both.
    pub fn union(self, other: Extent) -> Extent {
        Extent {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.min(other.bottom),
            top: self.top.max(other.top),
        }
    }
}
