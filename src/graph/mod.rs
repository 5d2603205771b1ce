//! Navigation graph extraction from a quadtree.
//!
//! One vertex per free leaf (at the region center), one edge per pair of
//! free leaves that share a boundary segment of positive length, plus two
//! endpoint vertices spliced into the regions that contain them.
//!
//! ```rust
//! use marga::{Field, Point2D, Rect};
//! use marga::quadtree::{decompose, DecomposeConfig};
//! use marga::graph::extract;
//!
//! let field = Field::new(16.0, vec![Rect::new(8.0, 0.0, 8.0, 8.0)]).unwrap();
//! let tree = decompose(&field, &DecomposeConfig::default()).unwrap();
//! let graph = extract(&tree, Point2D::new(1.0, 1.0), Point2D::new(15.0, 15.0)).unwrap();
//!
//! println!("{} vertices, {} edges", graph.vertex_count(), graph.edge_count());
//! ```

mod adjacency;
mod extract;
mod vertex;

pub use extract::{extract, NavGraph};
pub use vertex::{GraphVertex, VertexKind};
