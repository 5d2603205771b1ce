//! # Marga: Quadtree Path Planning Library
//!
//! Shortest obstacle-avoiding paths between two points in a square 2D
//! field of axis-aligned rectangular obstacles.
//!
//! Instead of searching a uniform grid, the field is adaptively
//! decomposed into a quadtree whose free leaves become graph vertices.
//! Large open areas collapse into single regions, so the graph the solver
//! searches has O(tree leaves) vertices rather than O(cells), and the
//! whole pipeline stays at O((V + E) log V).
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::{plan_route, Field, Point2D, Rect};
//! use marga::quadtree::DecomposeConfig;
//!
//! let field = Field::new(32.0, vec![Rect::new(14.0, 14.0, 6.0, 4.0)]).unwrap();
//! let config = DecomposeConfig::default();
//!
//! let path = plan_route(
//!     &field,
//!     &config,
//!     Point2D::new(16.0, 0.0),
//!     Point2D::new(16.0, 32.0),
//! )
//! .unwrap();
//!
//! println!("{} waypoints, length {:.2}", path.points.len(), path.length);
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────┐    ┌──────────────┐    ┌────────────┐    ┌────────────┐
//! │   Field   │───►│   QuadTree   │───►│  NavGraph  │───►│    Path    │
//! │ (domain + │    │ (free/blocked│    │ (vertices, │    │ (waypoint  │
//! │ obstacles)│    │   regions)   │    │   edges)   │    │  sequence) │
//! └───────────┘    └──────────────┘    └────────────┘    └────────────┘
//!     field::Field   quadtree::decompose  graph::extract   planner::shortest_path
//! ```
//!
//! Each stage consumes the immutable output of the previous one; nothing
//! is mutated after its construction phase. The three stage functions are
//! pure and can be called individually, or together through
//! [`plan_route`], which also logs per-stage wall-clock timing at debug
//! level.
//!
//! ## Modules
//!
//! - [`core`]: geometric primitives ([`Point2D`], [`Rect`])
//! - [`field`]: validated field description
//! - [`quadtree`]: adaptive spatial decomposition
//! - [`graph`]: navigation-graph extraction with R-tree adjacency search
//! - [`planner`]: Dijkstra shortest-path solver
//!
//! ## Failure modes
//!
//! - [`PlanError::InvalidField`]: bad field size, malformed or
//!   out-of-bounds obstacle, bad configuration
//! - [`PlanError::UnreachablePoint`]: an endpoint inside an obstacle or
//!   outside the field
//! - [`PlanError::NoPath`]: free space between the endpoints is
//!   disconnected (an expected outcome for enclosed endpoints)

pub mod core;
pub mod error;
pub mod field;
pub mod graph;
pub mod planner;
pub mod quadtree;

pub use crate::core::{Point2D, Rect};
pub use crate::error::{PlanError, Result};
pub use crate::field::Field;
pub use crate::graph::NavGraph;
pub use crate::quadtree::QuadTree;

use std::time::Instant;

use log::debug;

use crate::quadtree::DecomposeConfig;

/// A planned path through the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Waypoints from start to goal, inclusive.
    pub points: Vec<Point2D>,
    /// Total path length in field units.
    pub length: f32,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            length: 0.0,
        }
    }

    /// Check if the path has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the full planning pipeline: decompose, extract, solve.
///
/// Stage timing is measured here, around the pure stage calls, and
/// emitted through the `log` facade; the stages themselves carry no
/// instrumentation state.
///
/// # Errors
/// Any [`PlanError`] produced by the individual stages.
pub fn plan_route(
    field: &Field,
    config: &DecomposeConfig,
    start: Point2D,
    goal: Point2D,
) -> Result<Path> {
    let t = Instant::now();
    let tree = quadtree::decompose(field, config)?;
    debug!(
        "[Pipeline] decompose: {} nodes in {:?}",
        tree.node_count(),
        t.elapsed()
    );

    let t = Instant::now();
    let graph = graph::extract(&tree, start, goal)?;
    debug!(
        "[Pipeline] extract: {} vertices, {} edges in {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        t.elapsed()
    );

    let t = Instant::now();
    let path = planner::shortest_path(&graph, graph.start(), graph.goal())?;
    debug!(
        "[Pipeline] solve: {} waypoints, length {:.3} in {:?}",
        path.points.len(),
        path.length,
        t.elapsed()
    );

    Ok(path)
}
