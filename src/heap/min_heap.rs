//! Array backed binary min-heap.
//!
//! The storage is a zero-indexed complete binary tree: the children of index `i`
//! live at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. Every element is
//! less than or equal to its children.

use core::fmt;
use itertools::Itertools;
use tracing::trace;

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    storage: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { storage: vec![] }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            storage: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The smallest element, if any. Does not modify the heap.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Elements in storage order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T: Ord> MinHeap<T> {
    /// Inserts an element in O(log n)
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
        self.sift_up(self.storage.len() - 1);
    }

    /// Removes and returns the smallest element in O(log n), `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }
        let last = self.storage.len() - 1;
        self.storage.swap(0, last);
        let min = self.storage.pop();
        self.sift_down(0);
        min
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks the heap property for every element that has children
    pub fn is_heap(&self) -> bool {
        (1..self.storage.len()).all(|child| self.storage[parent(child)] <= self.storage[child])
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 && self.storage[index] < self.storage[parent(index)] {
            trace!(from = index, to = parent(index), "sift up");
            self.storage.swap(index, parent(index));
            index = parent(index);
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.storage.len();
        loop {
            // The smaller of the existing children, the left one wins ties
            let smallest = [left(index), right(index)]
                .into_iter()
                .filter(|child| *child < len)
                .min_by(|a, b| self.storage[*a].cmp(&self.storage[*b]));
            match smallest {
                Some(child) if self.storage[child] < self.storage[index] => {
                    trace!(from = index, to = child, "sift down");
                    self.storage.swap(index, child);
                    index = child;
                }
                _ => break,
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.storage.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        assert_eq!((left(0), right(0)), (1, 2));
        assert_eq!((left(3), right(3)), (7, 8));
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(8), 3);
    }

    #[test_log::test]
    fn test_push_pop_order() {
        let mut heap: MinHeap<i32> = [5, 3, 8, 1, 9, 2, 7].into_iter().collect();
        assert!(heap.is_heap());
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), 7);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.len(), 6);
        assert!(heap.is_heap());
        assert_eq!(heap.into_sorted_vec(), &[2, 3, 5, 7, 8, 9]);
    }

    #[test_log::test]
    fn test_sift_down_takes_smaller_child() {
        // The right child is smaller than the node but ties with the left one. Both must be
        // considered or the invariant breaks below.
        let mut heap = MinHeap {
            storage: vec![0, 2, 2, 5, 6, 3, 4, 9],
        };
        assert!(heap.is_heap());
        assert_eq!(heap.pop(), Some(0));
        assert!(heap.is_heap());
        assert_eq!(heap.as_slice()[0], 2);

        let mut heap = MinHeap {
            storage: vec![0, 4, 1, 5, 6, 3, 2, 9],
        };
        assert_eq!(heap.pop(), Some(0));
        assert!(heap.is_heap());
        assert_eq!(heap.into_sorted_vec(), &[1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_empty_heap() {
        let mut heap = MinHeap::<u8>::with_capacity(4);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
        assert!(heap.is_heap());
        heap.push(1);
        heap.clear();
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.to_string(), "[]");
    }

    #[test]
    fn test_duplicates_survive() {
        let heap: MinHeap<_> = [3, 1, 3, 1, 2].into_iter().collect();
        assert_eq!(heap.iter().count(), 5);
        assert_eq!(heap.to_string(), "[1, 1, 3, 3, 2]");
        assert_eq!(heap.into_sorted_vec(), &[1, 1, 2, 3, 3]);
    }
}
