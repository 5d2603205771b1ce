//! Fundamental geometric types.
//!
//! This module provides the types used throughout the planning pipeline:
//! - [`Point2D`]: 2D coordinate / vector in field units
//! - [`Rect`]: axis-aligned rectangle used for obstacles and tree regions

mod point;
mod rect;

pub use point::Point2D;
pub use rect::Rect;
