//! Boundary-indexed adjacency search between free regions.
//!
//! Quadtree leaves come in mixed sizes, so neighbor detection cannot rely
//! on uniform-grid offsets. Instead, all free-leaf bounds go into an
//! R-tree; each leaf then queries its slightly expanded envelope, which
//! returns only the handful of leaves touching it. That keeps the search
//! near O(n log n) instead of the O(n²) pairwise scan.
//!
//! Two regions are adjacent when they share a boundary segment of positive
//! length: equal edge coordinates on one axis (within a tolerance) and
//! overlapping projections on the other. Corner-only contact does not
//! count.

use rstar::{RTree, RTreeObject, AABB};

use crate::core::Rect;

/// A free-leaf region stored in the R-tree, tagged with its vertex index.
#[derive(Clone, Debug)]
struct IndexedRegion {
    rect: Rect,
    vertex: usize,
}

impl RTreeObject for IndexedRegion {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.x, self.rect.y],
            [self.rect.max_x(), self.rect.max_y()],
        )
    }
}

/// Check if two disjoint rectangles share a boundary segment longer than
/// `eps`.
pub(super) fn shares_edge(a: &Rect, b: &Rect, eps: f32) -> bool {
    let touch_x = (a.max_x() - b.x).abs() <= eps || (b.max_x() - a.x).abs() <= eps;
    let touch_y = (a.max_y() - b.y).abs() <= eps || (b.max_y() - a.y).abs() <= eps;

    (touch_x && overlap_len(a.y, a.max_y(), b.y, b.max_y()) > eps)
        || (touch_y && overlap_len(a.x, a.max_x(), b.x, b.max_x()) > eps)
}

/// Length of the overlap between intervals `[a0, a1]` and `[b0, b1]`.
#[inline]
fn overlap_len(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// Find all adjacent pairs among the given region bounds.
///
/// `regions[i]` corresponds to graph vertex `i`. Returned pairs satisfy
/// `i < j` and are sorted, so edge insertion order is deterministic for a
/// fixed input.
pub(super) fn adjacent_pairs(regions: &[Rect], eps: f32) -> Vec<(usize, usize)> {
    let indexed: Vec<IndexedRegion> = regions
        .iter()
        .enumerate()
        .map(|(vertex, &rect)| IndexedRegion { rect, vertex })
        .collect();
    let tree = RTree::bulk_load(indexed);

    let mut pairs = Vec::new();
    for (i, rect) in regions.iter().enumerate() {
        let query = AABB::from_corners(
            [rect.x - eps, rect.y - eps],
            [rect.max_x() + eps, rect.max_y() + eps],
        );
        for candidate in tree.locate_in_envelope_intersecting(&query) {
            if candidate.vertex > i && shares_edge(rect, &candidate.rect, eps) {
                pairs.push((i, candidate.vertex));
            }
        }
    }

    pairs.sort_unstable();
    pairs
}
