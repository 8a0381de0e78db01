//! Binary min-heap and the task queue built on it.

pub mod min_heap;
pub mod tasks;

pub use min_heap::MinHeap;
pub use tasks::{TaskHeap, TaskNode};
