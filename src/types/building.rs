//! Building type.
//!
//! A building is an axis-aligned rectangle described by its center and its
//! half-width / half-height, so it spans `[x - w, x + w] x [y - h, y + h]`.

use serde::Serialize;

use super::Extent;

/// A building placed in a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Building {
    /// Building identifier (unique among buildings).
    pub id: String,
    /// Center x-coordinate.
    pub x: i32,
    /// Center y-coordinate.
    pub y: i32,
    /// Half-width, at least 1.
    pub w: i32,
    /// Half-height, at least 1.
    pub h: i32,
}

impl Building {
    /// Create a new building.
    pub fn new(id: impl Into<String>, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
        }
    }

    /// Rectangle covered by the building.
    pub fn extent(&self) -> Extent {
        Extent::around(self.x, self.y, self.w, self.h)
    }

    /// Whether the two rectangles share interior area.
    ///
    /// Buildings that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Building) -> bool {
        self.extent().overlaps(&other.extent())
    }
}
