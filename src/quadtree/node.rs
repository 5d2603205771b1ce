//! Quadtree node arena.
//!
//! Nodes live in a flat arena and refer to their children by integer
//! handle, so the tree is trivially immutable after construction and
//! cheap to traverse without pointer chasing.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Rect};

/// Handle of a node inside a [`QuadTree`] arena.
pub type NodeId = usize;

/// Terminal classification of a leaf region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafKind {
    /// Region does not overlap any obstacle.
    Free,
    /// Region is obstructed (fully covered, or partially covered at the
    /// minimum subdivision size and treated as impassable).
    Blocked,
}

/// Node payload: either a terminal leaf or a split into 4 quadrants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Terminal region.
    Leaf(LeafKind),
    /// Split node. Children exactly partition the bounds into equal
    /// quadrants, in SW, SE, NW, NE order.
    Split([NodeId; 4]),
}

/// A single quadtree region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuadNode {
    /// Region bounds.
    pub bounds: Rect,
    /// Leaf classification or child handles.
    pub kind: NodeKind,
}

impl QuadNode {
    /// Check if this node is a free leaf.
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(LeafKind::Free))
    }

    /// Check if this node is a leaf (free or blocked).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }
}

/// Immutable quadtree over a field, produced by
/// [`decompose`](super::decompose).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuadTree {
    nodes: Vec<QuadNode>,
    root: NodeId,
}

impl QuadTree {
    pub(super) fn from_arena(nodes: Vec<QuadNode>, root: NodeId) -> Self {
        debug_assert!(root < nodes.len());
        Self { nodes, root }
    }

    /// Handle of the root node (the full field region).
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node by handle.
    #[inline]
    pub fn node(&self, id: NodeId) -> &QuadNode {
        &self.nodes[id]
    }

    /// Total number of nodes in the arena.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes (free or blocked).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Handles of all free leaves, in deterministic depth-first order
    /// (SW, SE, NW, NE at every split).
    pub fn free_leaves(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            match self.nodes[id].kind {
                NodeKind::Leaf(LeafKind::Free) => result.push(id),
                NodeKind::Leaf(LeafKind::Blocked) => {}
                NodeKind::Split(children) => {
                    // Reverse push so children pop in declaration order
                    for &child in children.iter().rev() {
                        stack.push(child);
                    }
                }
            }
        }

        result
    }

    /// Descend to the leaf containing a point (closed containment).
    ///
    /// A point exactly on an internal partition boundary is contained in
    /// more than one quadrant; descent takes the first matching child in
    /// SW, SE, NW, NE order, which keeps the result deterministic.
    ///
    /// Returns `None` if the point lies outside the root region.
    pub fn leaf_at(&self, point: Point2D) -> Option<NodeId> {
        let mut id = self.root;

        if !self.nodes[id].bounds.contains_point(point) {
            return None;
        }

        loop {
            match self.nodes[id].kind {
                NodeKind::Leaf(_) => return Some(id),
                NodeKind::Split(children) => {
                    let next = children
                        .iter()
                        .find(|&&c| self.nodes[c].bounds.contains_point(point))
                        .copied()?;
                    id = next;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-built 2-level tree: root split, SW child blocked, rest free.
    fn make_tree() -> QuadTree {
        let root_bounds = Rect::new(0.0, 0.0, 8.0, 8.0);
        let quads = root_bounds.quadrants();

        let mut nodes = Vec::new();
        nodes.push(QuadNode {
            bounds: quads[0],
            kind: NodeKind::Leaf(LeafKind::Blocked),
        });
        nodes.push(QuadNode {
            bounds: quads[1],
            kind: NodeKind::Leaf(LeafKind::Free),
        });
        nodes.push(QuadNode {
            bounds: quads[2],
            kind: NodeKind::Leaf(LeafKind::Free),
        });
        nodes.push(QuadNode {
            bounds: quads[3],
            kind: NodeKind::Leaf(LeafKind::Free),
        });
        nodes.push(QuadNode {
            bounds: root_bounds,
            kind: NodeKind::Split([0, 1, 2, 3]),
        });

        QuadTree::from_arena(nodes, 4)
    }

    #[test]
    fn test_free_leaves_order() {
        let tree = make_tree();
        assert_eq!(tree.free_leaves(), vec![1, 2, 3]);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_leaf_at() {
        let tree = make_tree();

        // Interior points
        assert_eq!(tree.leaf_at(Point2D::new(1.0, 1.0)), Some(0));
        assert_eq!(tree.leaf_at(Point2D::new(6.0, 1.0)), Some(1));
        assert_eq!(tree.leaf_at(Point2D::new(1.0, 6.0)), Some(2));
        assert_eq!(tree.leaf_at(Point2D::new(6.0, 6.0)), Some(3));

        // Point on the internal boundary resolves to the first quadrant
        assert_eq!(tree.leaf_at(Point2D::new(4.0, 4.0)), Some(0));

        // Outside the root
        assert_eq!(tree.leaf_at(Point2D::new(9.0, 1.0)), None);
    }
}
