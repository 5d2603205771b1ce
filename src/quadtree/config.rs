//! Configuration for the spatial decomposer.

use serde::{Deserialize, Serialize};

/// Configuration for quadtree decomposition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecomposeConfig {
    /// Minimum region side length (field units).
    /// A region at or below this size that still partially overlaps an
    /// obstacle is classified blocked instead of being split further.
    /// Default: 1.0
    pub min_cell_size: f32,

    /// Maximum recursion depth.
    /// Guards against pathological inputs; the default is far deeper than
    /// `min_cell_size` allows to reach on any realistic field.
    /// Default: 32
    pub max_depth: usize,
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self {
            min_cell_size: 1.0,
            max_depth: 32,
        }
    }
}

impl DecomposeConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the minimum region size.
    pub fn with_min_cell_size(mut self, size: f32) -> Self {
        self.min_cell_size = size;
        self
    }

    /// Builder-style setter for the maximum recursion depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
