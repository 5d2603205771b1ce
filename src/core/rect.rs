//! Axis-aligned rectangle for obstacles and tree regions.
//!
//! [`Rect`] is used in two roles:
//! - Obstacle footprint inside a [`Field`](crate::Field)
//! - Bounds of a quadtree region
//!
//! The containment and overlap predicates are the foundation of the
//! decomposition stage, so their interval conventions matter:
//!
//! - [`Rect::contains_point`] uses **closed** intervals (a point on the
//!   boundary is inside).
//! - [`Rect::intersects`] uses **open** intervals (two rectangles that only
//!   touch along an edge or corner do NOT intersect). An obstacle flush
//!   against a region boundary therefore never blocks the neighboring
//!   region.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned rectangle: origin corner plus positive extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the min corner.
    pub x: f32,
    /// Y coordinate of the min corner.
    pub y: f32,
    /// Extent along X. Must be positive.
    pub width: f32,
    /// Extent along Y. Must be positive.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its min corner and extent.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the max corner.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the max corner.
    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Shorter side of the rectangle.
    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Check if a point is inside the rectangle (closed intervals; the
    /// boundary counts as inside).
    #[inline]
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.x
            && point.x <= self.max_x()
            && point.y >= self.y
            && point.y <= self.max_y()
    }

    /// Check if this rectangle overlaps another with positive area.
    ///
    /// Open intervals: rectangles that merely share an edge or corner are
    /// not considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }

    /// Check if this rectangle fully covers another (closed intervals).
    #[inline]
    pub fn covers(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.max_x() >= other.max_x()
            && self.max_y() >= other.max_y()
    }

    /// Split into 4 equal quadrants.
    ///
    /// Order: SW, SE, NW, NE (low-y row first, low-x first within a row).
    /// The quadrants exactly partition the rectangle.
    #[inline]
    pub fn quadrants(&self) -> [Rect; 4] {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        [
            Rect::new(self.x, self.y, hw, hh),
            Rect::new(self.x + hw, self.y, hw, hh),
            Rect::new(self.x, self.y + hh, hw, hh),
            Rect::new(self.x + hw, self.y + hh, hw, hh),
        ]
    }
}
