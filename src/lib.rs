//! ## About
//!
//! This crate contains two classic data structures:
//!
//! * an [arena allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//!   N-ary [Tree] with depth-first and breadth-first traversal, and
//! * an array backed binary [MinHeap], plus a [TaskHeap] that hands out tasks
//!   ordered by their due date.
//!
//! ```rust
//! use arboretum::{TaskHeap, Tree};
//! use chrono::NaiveDate;
//!
//! let mut tree = Tree::new("root");
//! let root = tree.root();
//! let a = tree.add_child_value(root, "a").unwrap();
//! tree.add_child_value(a, "c").unwrap();
//! tree.add_child_value(root, "b").unwrap();
//! assert_eq!(tree.depth_first(root), vec![&"root", &"a", &"c", &"b"]);
//! assert_eq!(tree.breadth_first(), vec![&"root", &"a", &"b", &"c"]);
//!
//! let mut tasks = TaskHeap::new();
//! let due = NaiveDate::from_ymd_opt(2045, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! tasks.add("plant a tree", due);
//! assert_eq!(tasks.finish_task().map(|t| t.task), Some("plant a tree".to_string()));
//! assert!(tasks.finish_task().is_none());
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (no `get_` prefix), like the standard library.

pub mod arena;
pub mod errors;
pub mod format;
pub mod heap;

pub use arena::{ArenaNode, BreadthFirstIterator, DepthFirstIterator, NodeId, Nodelike, Tree};
pub use errors::ArboretumError;
pub use heap::{MinHeap, TaskHeap, TaskNode};
