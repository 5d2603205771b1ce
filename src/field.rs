//! Immutable field description: a square domain plus rectangular obstacles.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Rect};
use crate::error::{PlanError, Result};

/// A square 2D field of side `size` populated with axis-aligned obstacles.
///
/// Validated on construction and read-only afterwards: every obstacle must
/// have positive extent and lie within `[0, size] x [0, size]`. Obstacles
/// may overlap each other.
///
/// # Example
///
/// ```rust
/// use marga::{Field, Rect};
///
/// let field = Field::new(32.0, vec![Rect::new(4.0, 4.0, 8.0, 2.0)]).unwrap();
/// assert_eq!(field.size(), 32.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Field {
    size: f32,
    obstacles: Vec<Rect>,
}

impl Field {
    /// Create a validated field.
    ///
    /// # Errors
    /// [`PlanError::InvalidField`] if `size` is not positive and finite, if
    /// an obstacle has non-positive width or height, or if an obstacle
    /// extends outside the field.
    pub fn new(size: f32, obstacles: Vec<Rect>) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(PlanError::InvalidField(format!(
                "field size must be positive, got {size}"
            )));
        }

        for (i, obs) in obstacles.iter().enumerate() {
            if !(obs.width > 0.0 && obs.height > 0.0) {
                return Err(PlanError::InvalidField(format!(
                    "obstacle {i} has non-positive extent ({} x {})",
                    obs.width, obs.height
                )));
            }
            if obs.x < 0.0 || obs.y < 0.0 || obs.max_x() > size || obs.max_y() > size {
                return Err(PlanError::InvalidField(format!(
                    "obstacle {i} extends outside the {size} x {size} field"
                )));
            }
        }

        Ok(Self { size, obstacles })
    }

    /// Side length of the square field.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The full field region `[0, size] x [0, size]`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    /// The obstacle set.
    #[inline]
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Check if a point lies within the field (closed intervals).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        self.bounds().contains_point(point)
    }
}
