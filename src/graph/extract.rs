//! Graph construction from the decomposition.

use std::collections::HashMap;

use log::debug;

use crate::core::{Point2D, Rect};
use crate::error::{PlanError, Result};
use crate::quadtree::{NodeId, NodeKind, QuadTree};

use super::adjacency;
use super::vertex::{GraphVertex, VertexKind};

/// Relative tolerance for edge-coordinate comparison, scaled by the field
/// size. Leaf edges are derived by repeated halving, so matching edges are
/// near-identical; this only absorbs the last bits of rounding.
const EDGE_EPS_SCALE: f32 = 1e-5;

/// Weighted navigation graph over the free regions of a quadtree.
///
/// Immutable once extracted. Edges are stored as adjacency lists,
/// `edges()[i] = [(neighbor, distance), ...]`, with both directions
/// present for every undirected edge.
#[derive(Clone, Debug)]
pub struct NavGraph {
    vertices: Vec<GraphVertex>,
    edges: Vec<Vec<(usize, f32)>>,
    start: usize,
    goal: usize,
}

impl NavGraph {
    /// All vertices.
    #[inline]
    pub fn vertices(&self) -> &[GraphVertex] {
        &self.vertices
    }

    /// Look up a vertex by index.
    #[inline]
    pub fn vertex(&self, index: usize) -> &GraphVertex {
        &self.vertices[index]
    }

    /// Adjacency lists.
    #[inline]
    pub fn edges(&self) -> &[Vec<(usize, f32)>] {
        &self.edges
    }

    /// Index of the start vertex.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the goal vertex.
    #[inline]
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Number of vertices (free leaves plus the two endpoints).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.len()).sum::<usize>() / 2
    }
}

/// Extract the navigation graph from a quadtree, splicing in the start
/// and goal points.
///
/// Every pair of free leaves sharing a boundary segment of positive
/// length gets an edge weighted by the Euclidean distance between their
/// centers. The start and goal become dedicated vertices, each connected
/// to the center of the free leaf containing it; when both fall in the
/// same leaf they are additionally connected to each other directly (a
/// free leaf is convex, so the straight segment is traversable).
///
/// # Errors
/// [`PlanError::UnreachablePoint`] if no free leaf contains `start` or
/// `goal` (the point is inside an obstacle or outside the field).
pub fn extract(tree: &QuadTree, start: Point2D, goal: Point2D) -> Result<NavGraph> {
    let leaves = tree.free_leaves();

    let mut vertices: Vec<GraphVertex> = Vec::with_capacity(leaves.len() + 2);
    let mut vertex_of_leaf: HashMap<NodeId, usize> = HashMap::with_capacity(leaves.len());
    let mut bounds: Vec<Rect> = Vec::with_capacity(leaves.len());

    for (i, &leaf) in leaves.iter().enumerate() {
        let rect = tree.node(leaf).bounds;
        vertices.push(GraphVertex::region(rect.center(), leaf));
        vertex_of_leaf.insert(leaf, i);
        bounds.push(rect);
    }

    let mut edges: Vec<Vec<(usize, f32)>> = vec![Vec::new(); leaves.len() + 2];

    let root = tree.node(tree.root()).bounds;
    let eps = root.width.max(root.height) * EDGE_EPS_SCALE;

    for (i, j) in adjacency::adjacent_pairs(&bounds, eps) {
        let weight = vertices[i].position.distance(&vertices[j].position);
        edges[i].push((j, weight));
        edges[j].push((i, weight));
    }

    // Splice the endpoints into their containing regions
    let start_leaf = locate_free_leaf(tree, start)?;
    let goal_leaf = locate_free_leaf(tree, goal)?;

    let start_idx = vertices.len();
    vertices.push(GraphVertex {
        position: start,
        kind: VertexKind::Start,
    });
    connect(&mut edges, &vertices, start_idx, vertex_of_leaf[&start_leaf]);

    let goal_idx = vertices.len();
    vertices.push(GraphVertex {
        position: goal,
        kind: VertexKind::Goal,
    });
    connect(&mut edges, &vertices, goal_idx, vertex_of_leaf[&goal_leaf]);

    if start_leaf == goal_leaf {
        connect(&mut edges, &vertices, start_idx, goal_idx);
    }

    let graph = NavGraph {
        vertices,
        edges,
        start: start_idx,
        goal: goal_idx,
    };

    debug!(
        "[Extract] {} free leaves -> {} vertices, {} edges",
        leaves.len(),
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Add an undirected edge weighted by Euclidean distance.
fn connect(edges: &mut [Vec<(usize, f32)>], vertices: &[GraphVertex], a: usize, b: usize) {
    let weight = vertices[a].position.distance(&vertices[b].position);
    edges[a].push((b, weight));
    edges[b].push((a, weight));
}

/// Find a free leaf containing the point.
///
/// A point on an internal partition boundary is contained in more than
/// one leaf; all containing branches are searched so that a free leaf is
/// found whenever one exists, in deterministic traversal order.
fn locate_free_leaf(tree: &QuadTree, point: Point2D) -> Result<NodeId> {
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        let node = tree.node(id);
        if !node.bounds.contains_point(point) {
            continue;
        }
        match node.kind {
            NodeKind::Leaf(_) => {
                if node.is_free() {
                    return Ok(id);
                }
            }
            NodeKind::Split(children) => {
                for &child in children.iter().rev() {
                    stack.push(child);
                }
            }
        }
    }

    Err(PlanError::UnreachablePoint { point })
}
