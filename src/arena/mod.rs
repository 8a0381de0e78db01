//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! N-ary trees with depth-first and breadth-first traversal.
//!
//! The tree owns every node; children are referenced by [NodeId] and the parent
//! reference is a non-owning id as well, so no reference cycles can occur.

pub mod breadth;
pub mod depth;
pub mod node;
pub mod render;
pub mod tree;

pub use breadth::BreadthFirstIterator;
pub use depth::DepthFirstIterator;
pub use node::{ArenaNode, NodeId, Nodelike};
pub use render::MARKER;
pub use tree::Tree;
