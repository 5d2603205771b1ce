//! Graph vertex records.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::quadtree::NodeId;

/// What a vertex represents.
///
/// Vertex polymorphism is a plain tagged variant; there is no dispatch on
/// it anywhere in the solver, which treats all vertices uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexKind {
    /// Center of a free quadtree leaf.
    Region {
        /// Handle of the originating leaf.
        leaf: NodeId,
    },
    /// The route start point.
    Start,
    /// The route goal point.
    Goal,
}

/// A navigable point in the extracted graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphVertex {
    /// Position in field coordinates (region center, or the raw
    /// start/goal coordinate).
    pub position: Point2D,
    /// Vertex role.
    pub kind: VertexKind,
}

impl GraphVertex {
    /// Create a region vertex.
    #[inline]
    pub fn region(position: Point2D, leaf: NodeId) -> Self {
        Self {
            position,
            kind: VertexKind::Region { leaf },
        }
    }

    /// Check if this vertex is one of the two route endpoints.
    #[inline]
    pub fn is_endpoint(&self) -> bool {
        matches!(self.kind, VertexKind::Start | VertexKind::Goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_kinds() {
        let region = GraphVertex::region(Point2D::new(2.0, 2.0), 7);
        assert!(!region.is_endpoint());
        assert_eq!(region.kind, VertexKind::Region { leaf: 7 });

        let start = GraphVertex {
            position: Point2D::ZERO,
            kind: VertexKind::Start,
        };
        assert!(start.is_endpoint());
    }
}
