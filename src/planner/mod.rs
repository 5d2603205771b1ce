//! Shortest-path search over the navigation graph.
//!
//! ```rust
//! use marga::{Field, Point2D};
//! use marga::quadtree::{decompose, DecomposeConfig};
//! use marga::graph::extract;
//! use marga::planner::shortest_path;
//!
//! let field = Field::new(32.0, Vec::new()).unwrap();
//! let tree = decompose(&field, &DecomposeConfig::default()).unwrap();
//! let graph = extract(&tree, Point2D::new(16.0, 0.0), Point2D::new(16.0, 32.0)).unwrap();
//!
//! let path = shortest_path(&graph, graph.start(), graph.goal()).unwrap();
//! assert_eq!(path.points.len(), 2);
//! ```

mod dijkstra;

pub use dijkstra::{dijkstra, DijkstraResult};

use log::debug;

use crate::error::{PlanError, Result};
use crate::graph::NavGraph;
use crate::Path;

/// Compute the minimum-weight waypoint path between two graph vertices.
///
/// Runs Dijkstra over the graph's adjacency lists and maps the resulting
/// vertex sequence to positions. The returned path starts at `start`'s
/// position, ends at `goal`'s, and reports the solver's total weight as
/// its length.
///
/// # Errors
/// [`PlanError::NoPath`] if the goal is unreachable from the start (free
/// space is disconnected). This is an expected negative outcome, not a
/// bug.
pub fn shortest_path(graph: &NavGraph, start: usize, goal: usize) -> Result<Path> {
    let result = dijkstra(graph.edges(), start, goal).ok_or(PlanError::NoPath)?;

    let points = result
        .path
        .iter()
        .map(|&idx| graph.vertex(idx).position)
        .collect();

    debug!(
        "[Planner] path with {} waypoints, length {:.3}",
        result.path.len(),
        result.distance
    );

    Ok(Path {
        points,
        length: result.distance,
    })
}
