//! Recursive quadtree construction.

use log::{debug, trace};

use crate::core::Rect;
use crate::error::{PlanError, Result};
use crate::field::Field;

use super::config::DecomposeConfig;
use super::node::{LeafKind, NodeId, NodeKind, QuadNode, QuadTree};

/// Decompose a field into a quadtree of free and blocked regions.
///
/// Classification per region:
/// - no obstacle overlaps the region → free leaf
/// - a single obstacle covers the region entirely → blocked leaf
/// - otherwise, split into 4 equal quadrants and recurse; once the region
///   side reaches `config.min_cell_size` (or the depth limit), a partially
///   obstructed region becomes a blocked leaf — safety is favored over
///   optimism for cells that cannot be resolved further
///
/// Overlap tests use open intervals, so an obstacle flush against a
/// partition boundary never blocks the region on the other side.
///
/// Termination is guaranteed: region size halves on every level and the
/// minimum size forces a leaf decision.
///
/// # Errors
/// [`PlanError::InvalidField`] if `config.min_cell_size` is not positive.
pub fn decompose(field: &Field, config: &DecomposeConfig) -> Result<QuadTree> {
    if !config.min_cell_size.is_finite() || config.min_cell_size <= 0.0 {
        return Err(PlanError::InvalidField(format!(
            "min_cell_size must be positive, got {}",
            config.min_cell_size
        )));
    }

    let mut nodes = Vec::new();
    let root = build_region(&mut nodes, field.bounds(), field.obstacles(), 0, config);

    debug!(
        "[Decompose] field size {} with {} obstacles -> {} nodes",
        field.size(),
        field.obstacles().len(),
        nodes.len()
    );

    Ok(QuadTree::from_arena(nodes, root))
}

/// Build the subtree for one region. Children are pushed before their
/// parent, so the returned handle is always the last node pushed.
fn build_region(
    nodes: &mut Vec<QuadNode>,
    bounds: Rect,
    candidates: &[Rect],
    depth: usize,
    config: &DecomposeConfig,
) -> NodeId {
    // Only obstacles overlapping this region can matter below it
    let hits: Vec<Rect> = candidates
        .iter()
        .filter(|obs| obs.intersects(&bounds))
        .copied()
        .collect();

    let kind = if hits.is_empty() {
        NodeKind::Leaf(LeafKind::Free)
    } else if hits.iter().any(|obs| obs.covers(&bounds)) {
        NodeKind::Leaf(LeafKind::Blocked)
    } else if bounds.min_side() <= config.min_cell_size || depth >= config.max_depth {
        trace!(
            "[Decompose] partial region at ({}, {}) size {} treated as blocked",
            bounds.x,
            bounds.y,
            bounds.min_side()
        );
        NodeKind::Leaf(LeafKind::Blocked)
    } else {
        let children = bounds
            .quadrants()
            .map(|quad| build_region(nodes, quad, &hits, depth + 1, config));
        NodeKind::Split(children)
    };

    nodes.push(QuadNode { bounds, kind });
    nodes.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;

    fn make_field(size: f32, obstacles: Vec<Rect>) -> Field {
        Field::new(size, obstacles).unwrap()
    }

    #[test]
    fn test_empty_field_single_free_leaf() {
        let field = make_field(32.0, Vec::new());
        let tree = decompose(&field, &DecomposeConfig::default()).unwrap();

        assert_eq!(tree.node_count(), 1);
        let root = tree.node(tree.root());
        assert!(root.is_free());
        assert_eq!(root.bounds, Rect::new(0.0, 0.0, 32.0, 32.0));
    }

    #[test]
    fn test_fully_covered_field_single_blocked_leaf() {
        let field = make_field(16.0, vec![Rect::new(0.0, 0.0, 16.0, 16.0)]);
        let tree = decompose(&field, &DecomposeConfig::default()).unwrap();

        assert_eq!(tree.node_count(), 1);
        assert!(!tree.node(tree.root()).is_free());
        assert!(tree.free_leaves().is_empty());
    }

    #[test]
    fn test_partial_obstacle_splits_root() {
        let field = make_field(16.0, vec![Rect::new(0.0, 0.0, 8.0, 8.0)]);
        let tree = decompose(&field, &DecomposeConfig::default()).unwrap();

        // SW quadrant blocked, other three free
        let root = tree.node(tree.root());
        let NodeKind::Split(children) = root.kind else {
            panic!("root should be split");
        };
        assert!(!tree.node(children[0]).is_free()); // SW
        assert!(tree.node(children[1]).is_free()); // SE
        assert!(tree.node(children[2]).is_free()); // NW
        assert!(tree.node(children[3]).is_free()); // NE
        assert_eq!(tree.free_leaves().len(), 3);
    }

    #[test]
    fn test_boundary_touching_obstacle_does_not_block_neighbor() {
        // Obstacle exactly fills the SE quadrant; its edges touch the SW
        // and NE quadrants without overlapping them
        let field = make_field(16.0, vec![Rect::new(8.0, 0.0, 8.0, 8.0)]);
        let tree = decompose(&field, &DecomposeConfig::default()).unwrap();

        assert_eq!(tree.free_leaves().len(), 3);
        // The quadrant matching the obstacle is the one that went blocked
        let free_bounds: Vec<_> = tree
            .free_leaves()
            .iter()
            .map(|&id| tree.node(id).bounds)
            .collect();
        assert!(!free_bounds.contains(&Rect::new(8.0, 0.0, 8.0, 8.0)));
    }

    #[test]
    fn test_min_cell_partial_is_blocked() {
        // Obstacle with non-integer edges forces subdivision down to the
        // minimum size; the surviving partial cells must all be blocked
        let field = make_field(8.0, vec![Rect::new(2.5, 2.5, 1.0, 1.0)]);
        let config = DecomposeConfig::default().with_min_cell_size(1.0);
        let tree = decompose(&field, &config).unwrap();

        for &id in &tree.free_leaves() {
            let bounds = tree.node(id).bounds;
            for obs in field.obstacles() {
                assert!(
                    !obs.intersects(&bounds),
                    "free leaf at ({}, {}) overlaps an obstacle",
                    bounds.x,
                    bounds.y
                );
            }
        }
    }

    #[test]
    fn test_children_partition_parents_exactly() {
        let field = make_field(
            32.0,
            vec![Rect::new(3.0, 5.0, 7.0, 9.0), Rect::new(20.0, 18.0, 6.0, 3.0)],
        );
        let tree = decompose(&field, &DecomposeConfig::default()).unwrap();

        for id in 0..tree.node_count() {
            let node = tree.node(id);
            if let NodeKind::Split(children) = node.kind {
                let total_area: f32 = children
                    .iter()
                    .map(|&c| tree.node(c).bounds.area())
                    .sum();
                assert!((total_area - node.bounds.area()).abs() < 1e-3);

                for i in 0..4 {
                    let child = tree.node(children[i]).bounds;
                    assert!(node.bounds.covers(&child));
                    for j in (i + 1)..4 {
                        assert!(!child.intersects(&tree.node(children[j]).bounds));
                    }
                }
            }
        }
    }

    #[test]
    fn test_decomposition_matches_direct_point_tests() {
        let obstacles = vec![
            Rect::new(4.0, 4.0, 8.0, 3.0),
            Rect::new(18.0, 10.0, 5.0, 12.0),
            Rect::new(10.0, 20.0, 14.0, 4.0),
        ];
        let field = make_field(32.0, obstacles);
        let tree = decompose(&field, &DecomposeConfig::default()).unwrap();

        // Deterministic grid of sample points; every sample strictly inside
        // a free leaf must be strictly outside every obstacle
        for i in 0..64 {
            for j in 0..64 {
                let p = Point2D::new(0.25 + i as f32 * 0.5, 0.25 + j as f32 * 0.5);
                let leaf = tree.leaf_at(p).expect("field point must land in a leaf");

                if tree.node(leaf).is_free() {
                    for obs in field.obstacles() {
                        let strictly_inside = p.x > obs.x
                            && p.x < obs.max_x()
                            && p.y > obs.y
                            && p.y < obs.max_y();
                        assert!(!strictly_inside, "free leaf contains obstacle interior");
                    }
                }
            }
        }
    }

    #[test]
    fn test_rejects_bad_min_cell_size() {
        let field = make_field(8.0, Vec::new());
        let config = DecomposeConfig::default().with_min_cell_size(0.0);
        assert!(matches!(
            decompose(&field, &config),
            Err(PlanError::InvalidField(_))
        ));
    }

    #[test]
    fn test_depth_limit_forces_leaf() {
        let field = make_field(8.0, vec![Rect::new(1.3, 1.7, 2.1, 0.9)]);
        let config = DecomposeConfig::default()
            .with_min_cell_size(0.001)
            .with_max_depth(3);
        let tree = decompose(&field, &config).unwrap();

        // Depth 3 on an 8-unit field means no leaf smaller than 1 unit
        for id in 0..tree.node_count() {
            let node = tree.node(id);
            if node.is_leaf() {
                assert!(node.bounds.min_side() >= 1.0 - 1e-4);
            }
        }
    }
}
