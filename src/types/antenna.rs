//! Antenna type.

use serde::Serialize;

use super::Extent;

/// An antenna placed in a scene, covering a disc of radius `r`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Antenna {
    /// Antenna identifier (unique among antennas).
    pub id: String,
    /// Position x-coordinate.
    pub x: i32,
    /// Position y-coordinate.
    pub y: i32,
    /// Coverage radius, at least 1.
    pub r: i32,
}

impl Antenna {
    /// Create a new antenna.
    pub fn new(id: impl Into<String>, x: i32, y: i32, r: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            r,
        }
    }

    /// Position as an (x, y) pair.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Square bounding the coverage disc.
    pub fn extent(&self) -> Extent {
        Extent::around(self.x, self.y, self.r, self.r)
    }

    /// Whether both antennas sit on exactly the same point.
    pub fn is_collocated_with(&self, other: &Antenna) -> bool {
        self.position() == other.position()
    }
}
