//! Adaptive spatial decomposition of a field into free and blocked regions.
//!
//! The decomposer recursively splits the field into quadrants until each
//! region is fully free, fully blocked, or too small to split further.
//! Large open areas stay as single leaves, so the region count grows with
//! obstacle complexity rather than field area.
//!
//! ```rust
//! use marga::{Field, Rect};
//! use marga::quadtree::{decompose, DecomposeConfig};
//!
//! let field = Field::new(32.0, vec![Rect::new(8.0, 8.0, 4.0, 4.0)]).unwrap();
//! let tree = decompose(&field, &DecomposeConfig::default()).unwrap();
//!
//! println!("{} leaves, {} free", tree.leaf_count(), tree.free_leaves().len());
//! ```

mod builder;
mod config;
mod node;

pub use builder::decompose;
pub use config::DecomposeConfig;
pub use node::{LeafKind, NodeId, NodeKind, QuadNode, QuadTree};
