//! Breadth-first (level-order) traversal of an arena tree

use super::{ArenaNode, NodeId, Tree};
use std::collections::VecDeque;

/// Iterator visiting all nodes at depth `d` before any node at depth `d + 1`.
/// Uses a FIFO queue seeded with the start node.
pub struct BreadthFirstIterator<'a, Load> {
    tree: &'a Tree<Load>,
    queue: VecDeque<NodeId>,
}

impl<'a, Load> BreadthFirstIterator<'a, Load> {
    pub fn new(tree: &'a Tree<Load>, root: NodeId) -> Self {
        let mut queue = VecDeque::new();
        if tree.node(root).is_some() {
            queue.push_back(root);
        }
        BreadthFirstIterator { tree, queue }
    }
}

impl<'a, Load> Iterator for BreadthFirstIterator<'a, Load> {
    type Item = &'a ArenaNode<Load>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            if let Some(node) = self.tree.node(id) {
                self.queue.extend(node.children.iter().copied());
                return Some(node);
            }
        }
        None
    }
}
